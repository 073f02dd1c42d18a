//! Service wiring - every service built once over a shared connection pool.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AuthService, Authenticator, Catalog, EnergyService, PersonalDataService, StatisticsService,
    UserManager, UserService, VentureService,
};
use crate::config::Config;
use crate::domain::{
    CommentDraft, DocumentTypeDraft, EnergyDraft, HistoryDraft, RegionDraft, RoleDraft, UserTypeDraft,
};
use crate::infra::Persistence;

/// Application services shared by all request handlers.
pub struct Services {
    auth: Arc<dyn AuthService>,
    users: Arc<dyn UserService>,
    regions: Catalog<RegionDraft>,
    user_types: Catalog<UserTypeDraft>,
    document_types: Catalog<DocumentTypeDraft>,
    roles: Catalog<RoleDraft>,
    comments: Catalog<CommentDraft>,
    history: Catalog<HistoryDraft>,
    energy: EnergyService,
    ventures: VentureService,
    personal_data: PersonalDataService,
    statistics: StatisticsService,
}

impl Services {
    /// Create every service from a database connection and config
    pub fn from_connection(db: DatabaseConnection, config: &Config) -> Self {
        let persistence = Persistence::new(db);
        let conn = persistence.connection();
        let refs = persistence.references();

        Self {
            auth: Arc::new(Authenticator::new(persistence.users(), config)),
            users: Arc::new(UserManager::new(
                persistence.users(),
                config.legacy_plaintext_passwords,
            )),
            regions: Catalog::new(conn.clone(), refs.clone()),
            user_types: Catalog::new(conn.clone(), refs.clone()),
            document_types: Catalog::new(conn.clone(), refs.clone()),
            roles: Catalog::new(conn.clone(), refs.clone()),
            comments: Catalog::new(conn.clone(), refs.clone()),
            history: Catalog::new(conn.clone(), refs.clone()),
            energy: EnergyService::new(Catalog::new(conn.clone(), refs.clone())),
            ventures: VentureService::new(
                Catalog::new(conn.clone(), refs.clone()),
                persistence.users(),
            ),
            personal_data: PersonalDataService::new(Catalog::new(conn, refs)),
            statistics: StatisticsService::new(persistence.statistics()),
        }
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }

    pub fn regions(&self) -> &Catalog<RegionDraft> {
        &self.regions
    }

    pub fn user_types(&self) -> &Catalog<UserTypeDraft> {
        &self.user_types
    }

    pub fn document_types(&self) -> &Catalog<DocumentTypeDraft> {
        &self.document_types
    }

    pub fn roles(&self) -> &Catalog<RoleDraft> {
        &self.roles
    }

    pub fn comments(&self) -> &Catalog<CommentDraft> {
        &self.comments
    }

    pub fn history(&self) -> &Catalog<HistoryDraft> {
        &self.history
    }

    pub fn energy(&self) -> &EnergyService {
        &self.energy
    }

    pub fn energy_records(&self) -> &Catalog<EnergyDraft> {
        self.energy.catalog()
    }

    pub fn ventures(&self) -> &VentureService {
        &self.ventures
    }

    pub fn personal_data(&self) -> &PersonalDataService {
        &self.personal_data
    }

    pub fn statistics(&self) -> &StatisticsService {
        &self.statistics
    }
}
