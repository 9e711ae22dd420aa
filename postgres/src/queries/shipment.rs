use shipment_core::{NewShipment, ShipmentId, ShipmentUpdate, ShipmentsPage, ShipmentsQuery};
use snafu::{IntoError, ResultExt};
use sqlx::{Postgres, QueryBuilder};

use crate::{
    error::{DuplicateContainerIdSnafu, QuerySnafu, Result},
    models, PostgresAdapter,
};

const SHIPMENT_COLUMNS: &str = "shipment_id, container_id, origin_port, destination_port, \
                                departure_date, status, eta, last_known_lat, last_known_lng, \
                                created_at, updated_at";

impl PostgresAdapter {
    pub(crate) async fn shipments_impl(&self, query: &ShipmentsQuery) -> Result<ShipmentsPage> {
        let mut count = QueryBuilder::new("SELECT COUNT(*) FROM shipments");
        push_filters(&mut count, query);

        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .context(QuerySnafu)?;

        let mut page = QueryBuilder::new(format!("SELECT {SHIPMENT_COLUMNS} FROM shipments"));
        push_filters(&mut page, query);
        page.push(" ORDER BY created_at DESC, shipment_id DESC LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(query.offset));

        let rows: Vec<models::Shipment> = page
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .context(QuerySnafu)?;

        let shipments = rows
            .into_iter()
            .map(shipment_core::Shipment::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(ShipmentsPage {
            shipments,
            total: total as u64,
        })
    }

    pub(crate) async fn shipment_by_id_impl(
        &self,
        id: ShipmentId,
    ) -> Result<Option<shipment_core::Shipment>> {
        let row: Option<models::Shipment> = sqlx::query_as(&format!(
            "SELECT {SHIPMENT_COLUMNS} FROM shipments WHERE shipment_id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .context(QuerySnafu)?;

        row.map(shipment_core::Shipment::try_from).transpose()
    }

    pub(crate) async fn create_shipment_impl(
        &self,
        shipment: &NewShipment,
    ) -> Result<shipment_core::Shipment> {
        let row: models::Shipment = sqlx::query_as(&format!(
            "
INSERT INTO
    shipments (
        container_id,
        origin_port,
        destination_port,
        departure_date,
        status,
        eta,
        last_known_lat,
        last_known_lng
    )
VALUES
    ($1, $2, $3, $4, $5, $6, $7, $8)
RETURNING
    {SHIPMENT_COLUMNS}
            "
        ))
        .bind(&shipment.container_id)
        .bind(&shipment.origin_port)
        .bind(&shipment.destination_port)
        .bind(shipment.departure_date)
        .bind(shipment.status.to_string())
        .bind(shipment.eta)
        .bind(shipment.last_known_lat)
        .bind(shipment.last_known_lng)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DuplicateContainerIdSnafu {
                    container_id: shipment.container_id.clone(),
                }
                .build()
            }
            e => QuerySnafu.into_error(e),
        })?;

        row.try_into()
    }

    pub(crate) async fn update_shipment_impl(
        &self,
        id: ShipmentId,
        update: &ShipmentUpdate,
    ) -> Result<Option<shipment_core::Shipment>> {
        let mut builder = QueryBuilder::new("UPDATE shipments SET updated_at = NOW()");

        if let Some(status) = update.status {
            builder.push(", status = ").push_bind(status.to_string());
        }
        if let Some(eta) = update.eta {
            builder.push(", eta = ").push_bind(eta);
        }
        if let Some(lat) = update.last_known_lat {
            builder.push(", last_known_lat = ").push_bind(lat);
        }
        if let Some(lng) = update.last_known_lng {
            builder.push(", last_known_lng = ").push_bind(lng);
        }

        builder
            .push(" WHERE shipment_id = ")
            .push_bind(id.into_inner())
            .push(format!(" RETURNING {SHIPMENT_COLUMNS}"));

        let row: Option<models::Shipment> = builder
            .build_query_as()
            .fetch_optional(&self.pool)
            .await
            .context(QuerySnafu)?;

        row.map(shipment_core::Shipment::try_from).transpose()
    }

    pub(crate) async fn delete_shipment_impl(&self, id: ShipmentId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM shipments WHERE shipment_id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .context(QuerySnafu)?;

        Ok(result.rows_affected() > 0)
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ShipmentsQuery) {
    let mut separator = " WHERE ";

    if let Some(search) = &query.search {
        let pattern = format!("%{search}%");
        builder
            .push(separator)
            .push("(container_id ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR origin_port ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR destination_port ILIKE ")
            .push_bind(pattern)
            .push(")");
        separator = " AND ";
    }

    if let Some(status) = query.status {
        builder
            .push(separator)
            .push("status = ")
            .push_bind(status.to_string());
    }
}
