use serde::Serialize;

use crate::config::Config;

pub const DESCRIPTION: &str = "DevOps course info service";
pub const FRAMEWORK: &str = "axum";

/// Static service metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub version: String,
    pub description: &'static str,
    pub framework: &'static str,
}

impl ServiceDescriptor {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.service_name.clone(),
            version: config.service_version.clone(),
            description: DESCRIPTION,
            framework: FRAMEWORK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_config() {
        let config = Config {
            service_name: "status-page".into(),
            service_version: "0.9.1".into(),
            ..Config::default()
        };
        let service = ServiceDescriptor::from_config(&config);
        assert_eq!(service.name, "status-page");
        assert_eq!(service.version, "0.9.1");
        assert_eq!(service.description, "DevOps course info service");
        assert_eq!(service.framework, "axum");
    }
}
