use serde::Deserialize;

/// Top-level configuration settings for the application.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub log: LogSettings,
    pub feed: FeedSettings,
}

/// Logging settings.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Feed conversion settings.
///
/// `input` is the backend feed file read when no path is given on the command
/// line; stdin is used when it is unset. `default_avatar` is assigned to every
/// record that arrives without an avatar.
#[derive(Debug, Deserialize, Clone)]
pub struct FeedSettings {
    pub input: Option<String>,
    pub default_avatar: Option<String>,
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled from `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub log: Option<PartialLogSettings>,
    pub feed: Option<PartialFeedSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartialFeedSettings {
    pub input: Option<String>,
    pub default_avatar: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogSettings {
                level: "info".to_string(),
            },
            feed: FeedSettings {
                input: None,
                default_avatar: None,
            },
        }
    }
}

impl Settings {
    /// Merges partially specified settings over the defaults.
    pub fn merge(partial: PartialSettings) -> Self {
        let default = Settings::default();

        Self {
            log: LogSettings {
                level: partial
                    .log
                    .and_then(|l| l.level)
                    .unwrap_or(default.log.level),
            },
            feed: FeedSettings {
                input: partial
                    .feed
                    .as_ref()
                    .and_then(|f| f.input.clone())
                    .or(default.feed.input),
                default_avatar: partial
                    .feed
                    .as_ref()
                    .and_then(|f| f.default_avatar.clone())
                    .or(default.feed.default_avatar),
            },
        }
    }
}
