pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Endpoint paths, timing and file locations used across the client,
    //! organized by functional area.

    // =============================================================================
    // BACKEND ENDPOINTS
    // =============================================================================

    /// Path of the dashboard summary endpoint, relative to the API base URL.
    pub const DASHBOARD_SUMMARY_PATH: &str = "/api/dashboard";

    /// Path the "Log out" action redirects to, relative to the API base URL.
    pub const LOGOUT_PATH: &str = "/logout";

    /// Base URL of a backend running locally in development mode.
    pub const LOCAL_API_URL: &str = "http://localhost:5000";

    /// Environment variable overriding the API base URL.
    pub const API_URL_ENV_VAR: &str = "GRADEBOOK_API_URL";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        /// Maximum time to establish a connection to the backend (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        /// Maximum time for a whole request, body included (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up unless a key is pressed (seconds)
        pub const SPLASH_SECS: u64 = 2;
        /// Input poll interval, which is also the redraw tick (milliseconds)
        pub const TICK_MS: u64 = 100;
        /// Width of the navigation sidebar in columns
        pub const SIDEBAR_WIDTH: u16 = 28;

        pub const fn splash_duration() -> Duration {
            Duration::from_secs(SPLASH_SECS)
        }

        pub const fn tick() -> Duration {
            Duration::from_millis(TICK_MS)
        }
    }

    /// Capacity of the channel carrying fetch outcomes back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 32;

    // =============================================================================
    // FILES
    // =============================================================================

    /// Directory under $HOME holding the config file and logs.
    pub const APP_DIR: &str = ".gradebook";
    pub const CONFIG_FILE_NAME: &str = "config.json";
    pub const LOG_DIR: &str = "logs";
    pub const LOG_FILE_NAME: &str = "gradebook.log";
}
