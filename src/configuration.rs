use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use serde::Deserialize;

use crate::holiday::holidayrule::HolidayRule;
use crate::repository::inmemoryrulerepository::InMemoryRuleRepository;
use crate::repository::repositoryerror::RepositoryError;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    countries: Vec<CountryJsonProp>
}

#[derive(Deserialize)]
struct CountryJsonProp {
    name: String,
    festivos: Vec<HolidayRule>
}

/// One validated rule repository per configured country, loaded from a
/// JSON catalog document.
pub struct Configuration {
    repository_cell: RefCell<HashMap<String, Arc<InMemoryRuleRepository>>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration { repository_cell: RefCell::new(HashMap::new()) }
    }

    /// The shared repository registered for `country`.
    pub fn repository(&self, country: &str) -> Result<Arc<InMemoryRuleRepository>, RepositoryError> {
        let map = self.repository_cell.borrow();
        map.get(country)
            .cloned()
            .ok_or_else(|| RepositoryError::CountryNotFound(country.to_owned()))
    }

    pub fn from_reader(&self, file_path: String) -> Result<(), RepositoryError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let mut map = self.repository_cell.borrow_mut();
        for country in json_prop.countries {
            let repository = InMemoryRuleRepository::new(country.festivos)?;
            tracing::debug!(country = %country.name, rules = repository.len(), "rule set loaded");
            map.insert(country.name, Arc::new(repository));
        }
        Ok(())
    }
}
