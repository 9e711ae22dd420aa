use async_trait::async_trait;
use shipment_core::{
    NewShipment, Shipment, ShipmentId, ShipmentUpdate, ShipmentsPage, ShipmentsQuery,
    WebApiInboundPort, WebApiOutboundPort,
};
use snafu::ResultExt;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    ConnectOptions, PgPool,
};

use crate::{
    error::{ConnectionSnafu, Result},
    settings::{PsqlLogStatements, PsqlSettings},
};

#[derive(Debug, Clone)]
pub struct PostgresAdapter {
    pub(crate) pool: PgPool,
}

impl PostgresAdapter {
    pub async fn new(settings: &PsqlSettings) -> Result<PostgresAdapter> {
        let mut connections_per_pool = settings.max_connections / 2;
        if connections_per_pool == 0 {
            connections_per_pool = 1;
        }

        let mut opts = PgConnectOptions::new()
            .username(&settings.username)
            .password(&settings.password)
            .host(&settings.ip)
            .port(settings.port)
            .options([("plan_cache_mode", "force_custom_plan")]);

        if let Some(db_name) = &settings.db_name {
            opts = opts.database(db_name);
        }

        if let Some(root_cert_path) = &settings.root_cert {
            opts = opts
                .ssl_root_cert(root_cert_path)
                .ssl_mode(PgSslMode::VerifyFull);
        }

        match settings.log_statements {
            PsqlLogStatements::Enable => (),
            PsqlLogStatements::Disable => {
                opts = opts.disable_statement_logging();
            }
        }

        let pool = PgPoolOptions::new()
            .max_connections(connections_per_pool)
            .connect_with(opts)
            .await
            .context(ConnectionSnafu)?;

        Ok(PostgresAdapter { pool })
    }

    pub async fn do_migrations(&self) {
        sqlx::migrate!()
            .set_ignore_missing(true)
            .run(&self.pool)
            .await
            .unwrap();
    }
}

#[async_trait]
impl WebApiOutboundPort for PostgresAdapter {
    async fn shipments(&self, query: &ShipmentsQuery) -> shipment_core::Result<ShipmentsPage> {
        self.shipments_impl(query).await.map_err(|e| e.into())
    }

    async fn shipment_by_id(&self, id: ShipmentId) -> shipment_core::Result<Option<Shipment>> {
        self.shipment_by_id_impl(id).await.map_err(|e| e.into())
    }
}

#[async_trait]
impl WebApiInboundPort for PostgresAdapter {
    async fn create_shipment(&self, shipment: &NewShipment) -> shipment_core::Result<Shipment> {
        self.create_shipment_impl(shipment)
            .await
            .map_err(|e| e.into())
    }

    async fn update_shipment(
        &self,
        id: ShipmentId,
        update: &ShipmentUpdate,
    ) -> shipment_core::Result<Option<Shipment>> {
        self.update_shipment_impl(id, update)
            .await
            .map_err(|e| e.into())
    }

    async fn delete_shipment(&self, id: ShipmentId) -> shipment_core::Result<bool> {
        self.delete_shipment_impl(id).await.map_err(|e| e.into())
    }
}
