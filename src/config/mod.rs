mod settings;

pub use settings::{
    AuthConfig, CloudinaryConfig, DispatchConfig, FirebaseConfig, LogFormat, LoggingConfig,
    ServerConfig, Settings,
};
