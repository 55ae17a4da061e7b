//! Default paths for the lishogi repository layout, relative to its root.

/// Compiled icon font.
pub const FONT_PATH: &str = "public/font/lishogi.ttf";

/// TypeScript constant map.
pub const TS_EXPORT_PATH: &str = "ui/common/src/icons.ts";

/// SCSS variables.
pub const SCSS_EXPORT_PATH: &str = "ui/common/css/abstract/_icons.scss";

/// Scala constants object.
pub const SCALA_EXPORT_PATH: &str = "modules/common/src/main/Icons.scala";

/// Bare positional flag that suppresses the Scala artifact.
pub const NO_SCALA_FLAG: &str = "no-scala";
