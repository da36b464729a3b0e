//! Default file lists of each command.
use crate::types::TargetSize;

/// Directory whose `.dart` files get their quotes fixed.
pub const ONBOARDING_DIR: &str = "lib/screens/onboarding";

/// Extension of the source files searched in directories.
pub const SOURCE_EXT: &str = "dart";

/// Files receiving the title case dictionary and letter spacing.
pub const TITLE_CASE_FILES: &[&str] = &[
    // screens
    "lib/screens/album_detail_screen.dart",
    "lib/screens/app_settings_screen.dart",
    "lib/screens/charts_screen.dart",
    "lib/screens/home_screen.dart",
    "lib/screens/playback_screen.dart",
    "lib/screens/player_screen.dart",
    "lib/screens/settings_screen.dart",
    "lib/screens/single_album_create_screen.dart",
    "lib/screens/artist_screen.dart",
    // widgets
    "lib/widgets/completion_dialog.dart",
    "lib/widgets/playback/annual_report_widget.dart",
    "lib/widgets/playback/calendar_widget.dart",
    "lib/widgets/playback/daily_report_widget.dart",
    "lib/widgets/playback/monthly_report_widget.dart",
    "lib/widgets/playback/weekly_report_widget.dart",
    "lib/widgets/playback/task_history_item.dart",
];

/// Files receiving translations.
pub const TRANSLATE_FILES: &[&str] = &[
    "lib/main_wrapper.dart",
    "lib/screens/home_screen.dart",
    "lib/screens/player_screen.dart",
    "lib/screens/album_detail_screen.dart",
    "lib/screens/settings_screen.dart",
    "lib/screens/charts_screen.dart",
    "lib/screens/playback_screen.dart",
    "lib/screens/single_album_create_screen.dart",
    "lib/widgets/completion_dialog.dart",
    "lib/widgets/album_completion_dialog.dart",
    "lib/models/notification_config.dart",
];

/// Screenshots to resize, in output order (`screenshot_1.png`, ...).
pub const SCREENSHOT_FILES: &[&str] = &[
    "Simulator Screenshot - iPhone 16 Pro - 2025-12-09 at 17.20.05.png",
    "Simulator Screenshot - iPhone 16 Pro - 2025-12-09 at 17.21.04.png",
    "Simulator Screenshot - iPhone 16 Pro - 2025-12-09 at 17.21.34.png",
    "Simulator Screenshot - iPhone 16 Pro - 2025-12-09 at 17.22.12.png",
    "Simulator Screenshot - iPhone 16 Pro - 2025-12-09 at 17.22.46.png",
    "Simulator Screenshot - iPhone 16 Pro - 2025-12-09 at 17.23.29.png",
];

/// Sub directory of the screenshot folder receiving resized images.
pub const SCREENSHOT_OUTPUT_DIR: &str = "resized_screenshots";

/// App Store size of a 6.9" iPhone (iPhone 16 Pro Max).
pub const SCREENSHOT_SIZE: TargetSize = TargetSize {
    width: 1290,
    height: 2796,
};

/// Default folder holding the screenshots: the user's desktop.
pub fn screenshot_input_dir() -> String {
    match std::env::var_os("HOME") {
        Some(home) => std::path::Path::new(&home)
            .join("Desktop")
            .to_string_lossy()
            .into_owned(),
        None => ".".to_string(),
    }
}

/// Name of the `index`-th (0-based) resized screenshot.
pub fn screenshot_output_name(index: usize) -> String {
    format!("screenshot_{}.png", index + 1)
}

pub fn to_owned_list(files: &[&str]) -> Vec<String> {
    files.iter().map(|f| f.to_string()).collect()
}

#[test]
fn test_screenshot_output_name() {
    assert_eq!(screenshot_output_name(0), "screenshot_1.png");
    assert_eq!(screenshot_output_name(5), "screenshot_6.png");
}
