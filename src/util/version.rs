pub const APP_NAME: &str = "ShipReward";
pub const APP_HOMEPAGE: &str = "https://shipreward.in";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");
pub const COPYRIGHT: &str = "2025 © ShipReward.in";

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

pub fn user_agent() -> String {
    format!("{}/{} (+{})", APP_NAME.to_lowercase(), version_label(), APP_HOMEPAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_app_and_version() {
        let agent = user_agent();
        assert!(agent.starts_with("shipreward/"));
        assert!(agent.contains(&version_label()));
    }
}
