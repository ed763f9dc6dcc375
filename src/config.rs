/// Configuration constants for the Power Platform admin APIs
pub mod api {
    /// Business Application Platform host (environments, roles, policies)
    pub const BAP_HOST: &str = "api.bap.microsoft.com";

    /// Power Apps host (apps, custom connectors)
    pub const POWERAPPS_HOST: &str = "api.powerapps.com";

    /// Power Automate host (flows, flow owners)
    pub const FLOW_HOST: &str = "api.flow.microsoft.com";

    /// API version query parameter used by all admin endpoints
    pub const API_VERSION: &str = "2016-11-01";
}

/// Configuration constants for Azure AD sign-in
pub mod auth {
    /// Token endpoints live under this host
    pub const LOGIN_HOST: &str = "login.microsoftonline.com";

    /// Well-known public client id used by the Power Platform admin tooling
    pub const CLIENT_ID: &str = "1950a258-227b-4e31-a9cf-717495945fc2";

    /// Resource audience for the primary session (environments, apps, flows)
    pub const POWERAPPS_RESOURCE: &str = "https://service.powerapps.com/";

    /// Resource audience for the governance session (DLP policies, roles)
    pub const GOVERNANCE_RESOURCE: &str = "https://api.bap.microsoft.com/";
}

/// Default values for CLI
pub mod defaults {
    /// Default report file, written to the current directory
    pub const REPORT_PATH: &str = "tenant-inventory.xlsx";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
