use std::{io::Error, net::TcpListener};

use actix_web::{
    dev::Server,
    middleware::{Compress, Condition},
    web::Data,
    HttpServer,
};
use postgres::PostgresAdapter;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    routes,
    settings::{Environment, Settings},
    ApiDoc, Database,
};

pub struct App {
    server: Server,
    port: u16,
}

impl App {
    pub async fn build(settings: &Settings) -> Self {
        let listener = TcpListener::bind(settings.api.listener_address()).unwrap();
        let port = listener.local_addr().unwrap().port();

        let postgres = PostgresAdapter::new(&settings.postgres).await.unwrap();

        let server = create_server(postgres, listener, settings).unwrap();

        App { server, port }
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        self.server.await
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

pub fn create_server<T>(database: T, listener: TcpListener, settings: &Settings) -> Result<Server, Error>
where
    T: Database + Clone + Send + 'static,
{
    let environment = settings.environment;
    let not_prod = environment != Environment::Production;

    let mut server = HttpServer::new(move || {
        let app = actix_web::App::new()
            .app_data(Data::new(database.clone()))
            .wrap(Compress::default())
            .wrap(Condition::new(not_prod, actix_cors::Cors::permissive()))
            .wrap(TracingLogger::default())
            .configure(routes::routes::<T>);

        match environment {
            Environment::Production | Environment::Test => app,
            _ => app.service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            ),
        }
    })
    .listen(listener)?;

    if let Some(workers) = settings.api.num_workers {
        server = server.workers(workers as usize);
    }

    Ok(server.run())
}
