//! Group-by queries feeding the statistics endpoints.

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QuerySelect, RelationTrait,
};

use super::entities::{energy_record, region, venture, venture_history};
use crate::domain::{EnergySummary, RegionCount};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Raw aggregates; ranking and percentages are computed by the caller.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    /// Venture count per region name
    async fn ventures_per_region(&self) -> AppResult<Vec<RegionCount>>;

    /// Total number of ventures
    async fn venture_total(&self) -> AppResult<u64>;

    /// Every (country, amount) pair of the venture history
    async fn country_amounts(&self) -> AppResult<Vec<(String, String)>>;

    /// Energy totals and averages per venture
    async fn energy_per_venture(&self) -> AppResult<Vec<EnergySummary>>;

    /// Venture count per type
    async fn ventures_per_type(&self) -> AppResult<Vec<(Option<String>, i64)>>;
}

#[derive(Debug, FromQueryResult)]
struct EnergyRow {
    idemprendimiento: i32,
    nombre_emprendimiento: String,
    total_produccion: Option<f64>,
    total_consumo: Option<f64>,
    promedio_produccion: Option<f64>,
    promedio_consumo: Option<f64>,
}

impl From<EnergyRow> for EnergySummary {
    fn from(row: EnergyRow) -> Self {
        EnergySummary {
            idemprendimiento: row.idemprendimiento,
            nombre_emprendimiento: row.nombre_emprendimiento,
            total_produccion: row.total_produccion.unwrap_or_default(),
            total_consumo: row.total_consumo.unwrap_or_default(),
            promedio_produccion: row.promedio_produccion.unwrap_or_default(),
            promedio_consumo: row.promedio_consumo.unwrap_or_default(),
        }
    }
}

/// StatisticsRepository over the live tables.
pub struct StatisticsStore {
    db: DatabaseConnection,
}

impl StatisticsStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn energy_column(column: energy_record::Column) -> Expr {
    Expr::col((energy_record::Entity, column))
}

#[async_trait]
impl StatisticsRepository for StatisticsStore {
    async fn ventures_per_region(&self) -> AppResult<Vec<RegionCount>> {
        let rows: Vec<(String, i64)> = venture::Entity::find()
            .select_only()
            .column(region::Column::NombreRegion)
            .column_as(venture::Column::Idemprendimiento.count(), "cantidad")
            .join(JoinType::InnerJoin, venture::Relation::Region.def())
            .group_by(region::Column::NombreRegion)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(nombre_region, cantidad)| RegionCount {
                nombre_region,
                cantidad,
            })
            .collect())
    }

    async fn venture_total(&self) -> AppResult<u64> {
        Ok(venture::Entity::find().count(&self.db).await?)
    }

    async fn country_amounts(&self) -> AppResult<Vec<(String, String)>> {
        Ok(venture_history::Entity::find()
            .select_only()
            .column(venture_history::Column::Pais)
            .column(venture_history::Column::CantidadEmprendimiento)
            .into_tuple()
            .all(&self.db)
            .await?)
    }

    async fn energy_per_venture(&self) -> AppResult<Vec<EnergySummary>> {
        let production = energy_record::Column::ProduccionEnergia;
        let consumption = energy_record::Column::ConsumoEnergia;

        let rows = energy_record::Entity::find()
            .select_only()
            .column(energy_record::Column::Idemprendimiento)
            .column_as(venture::Column::Nombre, "nombre_emprendimiento")
            .column_as(production.sum(), "total_produccion")
            .column_as(consumption.sum(), "total_consumo")
            .column_as(
                SimpleExpr::from(Func::avg(energy_column(production))),
                "promedio_produccion",
            )
            .column_as(
                SimpleExpr::from(Func::avg(energy_column(consumption))),
                "promedio_consumo",
            )
            .join(JoinType::InnerJoin, energy_record::Relation::Venture.def())
            .group_by(energy_record::Column::Idemprendimiento)
            .group_by(venture::Column::Nombre)
            .into_model::<EnergyRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(EnergySummary::from).collect())
    }

    async fn ventures_per_type(&self) -> AppResult<Vec<(Option<String>, i64)>> {
        Ok(venture::Entity::find()
            .select_only()
            .column(venture::Column::Tipo)
            .column_as(venture::Column::Idemprendimiento.count(), "cantidad")
            .group_by(venture::Column::Tipo)
            .into_tuple()
            .all(&self.db)
            .await?)
    }
}
