use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::canvas::{CanvasState, DragCommitMode, FontFamily};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfigData {
    /// Maximum number of undo steps kept (unbounded when absent)
    #[serde(default)]
    pub history_limit: Option<usize>,

    /// What a finished drag records in the undo history
    #[serde(default)]
    pub drag_commit_mode: DragCommitMode,

    /// Font family given to newly added text items
    #[serde(default)]
    pub default_font_family: FontFamily,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to change how drags are recorded in history
#[derive(Message)]
pub struct SetDragCommitModeRequest {
    pub mode: DragCommitMode,
}

/// Message to change the font family of new items
#[derive(Message)]
pub struct SetDefaultFontFamilyRequest {
    pub family: FontFamily,
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from `path`, falling back to defaults on any error
fn load_config(path: &Path) -> LoadConfigResult {
    if !path.exists() {
        info!("No config file found, using defaults");
        return LoadConfigResult {
            data: AppConfigData::default(),
            reset_reason: None,
        };
    }

    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", path);
                LoadConfigResult {
                    data,
                    reset_reason: None,
                }
            }
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                LoadConfigResult {
                    data: AppConfigData::default(),
                    reset_reason: Some(format!("Configuration file was corrupted: {}", e)),
                }
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Could not read configuration file: {}", e)),
            }
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Push config values into the canvas engine
fn apply_to_canvas(data: &AppConfigData, canvas: &mut CanvasState) {
    canvas.set_history_limit(data.history_limit);
    canvas.set_drag_commit_mode(data.drag_commit_mode);
    canvas.set_default_font_family(data.default_font_family);
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// Startup system to configure the canvas engine from the loaded config
fn apply_config_system(config: Res<AppConfig>, mut canvas: ResMut<CanvasState>) {
    apply_to_canvas(&config.data, &mut canvas);
    info!(
        "Canvas history limit {:?}, drag commit mode {:?}",
        canvas.history_limit(),
        canvas.drag_commit_mode()
    );
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to change the drag commit mode
fn set_drag_commit_mode_system(
    mut events: MessageReader<SetDragCommitModeRequest>,
    mut config: ResMut<AppConfig>,
    mut canvas: ResMut<CanvasState>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.drag_commit_mode == event.mode {
            continue;
        }
        config.data.drag_commit_mode = event.mode;
        canvas.set_drag_commit_mode(event.mode);
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!("Set drag commit mode to {:?}", event.mode);
    }
}

/// System to change the default font family for new items
fn set_default_font_family_system(
    mut events: MessageReader<SetDefaultFontFamilyRequest>,
    mut config: ResMut<AppConfig>,
    mut canvas: ResMut<CanvasState>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.default_font_family == event.family {
            continue;
        }
        config.data.default_font_family = event.family;
        canvas.set_default_font_family(event.family);
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!("Set default font family to {:?}", event.family);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<SetDragCommitModeRequest>()
            .add_message::<SetDefaultFontFamilyRequest>()
            .add_systems(
                Startup,
                (load_config_system, apply_config_system)
                    .chain()
                    .in_set(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                    set_drag_commit_mode_system.run_if(on_message::<SetDragCommitModeRequest>),
                    set_default_font_family_system
                        .run_if(on_message::<SetDefaultFontFamilyRequest>),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "textcanvas-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert!(data.history_limit.is_none());
        assert_eq!(data.drag_commit_mode, DragCommitMode::PreDrag);
        assert_eq!(data.default_font_family, FontFamily::Default);
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            history_limit: Some(250),
            drag_commit_mode: DragCommitMode::PostDrag,
            default_font_family: FontFamily::Monospace,
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, data);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: AppConfigData = serde_json::from_str(r#"{"history_limit": 10}"#).unwrap();
        assert_eq!(parsed.history_limit, Some(10));
        assert_eq!(parsed.drag_commit_mode, DragCommitMode::PreDrag);
        assert_eq!(parsed.default_font_family, FontFamily::Default);
    }

    #[test]
    fn test_load_missing_file_is_silent_default() {
        let result = load_config(&temp_config_path("missing"));
        assert_eq!(result.data, AppConfigData::default());
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_load_corrupted_file_reports_reset() {
        let path = temp_config_path("corrupted");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_config(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(result.data, AppConfigData::default());
        assert!(result.reset_reason.unwrap().contains("corrupted"));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let path = temp_config_path("roundtrip");
        let config = AppConfig {
            data: AppConfigData {
                history_limit: Some(3),
                drag_commit_mode: DragCommitMode::PostDrag,
                default_font_family: FontFamily::Serif,
            },
            config_path: path.clone(),
            dirty: true,
        };

        save_config(&config);
        let result = load_config(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(result.data, config.data);
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_apply_to_canvas() {
        let mut canvas = CanvasState::default();
        let data = AppConfigData {
            history_limit: Some(7),
            drag_commit_mode: DragCommitMode::PostDrag,
            default_font_family: FontFamily::Cursive,
        };

        apply_to_canvas(&data, &mut canvas);

        assert_eq!(canvas.history_limit(), Some(7));
        assert_eq!(canvas.drag_commit_mode(), DragCommitMode::PostDrag);
        canvas.add_new_item();
        assert_eq!(
            canvas.selected().map(|item| item.font_family),
            Some(FontFamily::Cursive)
        );
    }

    #[test]
    fn test_reset_notification_default() {
        let notification = ConfigResetNotification::default();
        assert!(!notification.show);
        assert!(notification.reason.is_none());
    }
}
