//! Aggregates for the statistics and dashboard endpoints.
//!
//! Every call recomputes from the tables; nothing is cached.

use std::sync::Arc;

use crate::config::TOP_COUNTRIES_LIMIT;
use crate::domain::statistics::{rank_countries, region_shares, sample_type_chart, type_chart};
use crate::domain::{CountryTotal, EnergySummary, RegionCount, RegionShare, TypeChart};
use crate::errors::AppResult;
use crate::infra::StatisticsRepository;

pub struct StatisticsService {
    repository: Arc<dyn StatisticsRepository>,
}

impl StatisticsService {
    pub fn new(repository: Arc<dyn StatisticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn by_region(&self) -> AppResult<Vec<RegionCount>> {
        self.repository.ventures_per_region().await
    }

    /// Share of all ventures per region, in percent with two decimals.
    pub async fn share_by_region(&self) -> AppResult<Vec<RegionShare>> {
        let counts = self.repository.ventures_per_region().await?;
        let total = self.repository.venture_total().await?;
        Ok(region_shares(counts, total))
    }

    pub async fn top_countries(&self) -> AppResult<Vec<CountryTotal>> {
        let rows = self.repository.country_amounts().await?;
        Ok(rank_countries(rows, TOP_COUNTRIES_LIMIT))
    }

    pub async fn energy_summary(&self) -> AppResult<Vec<EnergySummary>> {
        self.repository.energy_per_venture().await
    }

    /// Venture count per type; sample data while there are no ventures.
    pub async fn ventures_by_type(&self) -> AppResult<TypeChart> {
        let counts = self.repository.ventures_per_type().await?;
        if counts.is_empty() {
            tracing::debug!("No ventures yet, serving sample chart");
            return Ok(sample_type_chart());
        }
        Ok(type_chart(counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockStatisticsRepository;

    fn service(repo: MockStatisticsRepository) -> StatisticsService {
        StatisticsService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_top_countries_sums_and_ranks() {
        let mut repo = MockStatisticsRepository::new();
        repo.expect_country_amounts().returning(|| {
            Ok(vec![
                ("A".to_string(), "5".to_string()),
                ("B".to_string(), "20".to_string()),
                ("A".to_string(), "3".to_string()),
            ])
        });

        let top = service(repo).top_countries().await.unwrap();

        assert_eq!(top.len(), 2);
        assert_eq!((top[0].country.as_str(), top[0].ventures), ("B", 20.0));
        assert_eq!((top[1].country.as_str(), top[1].ventures), ("A", 8.0));
    }

    #[tokio::test]
    async fn test_share_by_region_empty_when_no_ventures() {
        let mut repo = MockStatisticsRepository::new();
        repo.expect_ventures_per_region().returning(|| Ok(Vec::new()));
        repo.expect_venture_total().returning(|| Ok(0));

        assert!(service(repo).share_by_region().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_type_chart_falls_back_to_sample() {
        let mut repo = MockStatisticsRepository::new();
        repo.expect_ventures_per_type().returning(|| Ok(Vec::new()));

        let chart = service(repo).ventures_by_type().await.unwrap();

        assert!(chart.mensaje.is_some());
        assert_eq!(chart.total, 15);
    }

    #[tokio::test]
    async fn test_type_chart_counts_real_data() {
        let mut repo = MockStatisticsRepository::new();
        repo.expect_ventures_per_type()
            .returning(|| Ok(vec![(Some("Servicios".into()), 2), (None, 1)]));

        let chart = service(repo).ventures_by_type().await.unwrap();

        assert!(chart.mensaje.is_none());
        assert_eq!(chart.total, 3);
        assert!(chart.labels.contains(&"No especificado".to_string()));
    }
}
