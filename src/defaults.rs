//! Built-in base theme
//!
//! A compact default token table used when a project config names no
//! `base` file. It follows the usual 0.25rem spacing scale.

use crate::core::error::ConfigError;
use crate::core::models::{RawLayer, ThemeLayer};

/// Default token table, in the same TOML shape as a `base` file
pub const DEFAULT_THEME: &str = r##"
[spacing]
px = "1px"
0 = "0px"
"0.5" = "0.125rem"
1 = "0.25rem"
2 = "0.5rem"
3 = "0.75rem"
4 = "1rem"
5 = "1.25rem"
6 = "1.5rem"
8 = "2rem"
10 = "2.5rem"
12 = "3rem"
16 = "4rem"
20 = "5rem"
24 = "6rem"
32 = "8rem"
48 = "12rem"
64 = "16rem"
96 = "24rem"

[height]
auto = "auto"
full = "100%"
screen = "100vh"

[width]
auto = "auto"
full = "100%"
screen = "100vw"
"1/2" = "50%"
"1/3" = "33.333333%"
"2/3" = "66.666667%"

[minHeight]
0 = "0px"
full = "100%"
screen = "100vh"

[maxWidth]
none = "none"
xs = "20rem"
sm = "24rem"
md = "28rem"
lg = "32rem"
xl = "36rem"
full = "100%"

[fontFamily]
sans = ["ui-sans-serif", "system-ui", "sans-serif"]
serif = ["ui-serif", "Georgia", "serif"]
mono = ["ui-monospace", "SFMono-Regular", "monospace"]

[fontWeight]
normal = "400"
medium = "500"
semibold = "600"
bold = "700"

[fontSize]
xs = "0.75rem"
sm = "0.875rem"
base = "1rem"
lg = "1.125rem"
xl = "1.25rem"
"2xl" = "1.5rem"
"8xl" = "6rem"

[colors]
white = "#ffffff"
black = "#000000"
transparent = "transparent"

[colors.gray]
100 = "#f3f4f6"
500 = "#6b7280"
900 = "#111827"

[colors.amber]
DEFAULT = "#f59e0b"
500 = "#f59e0b"
600 = "#d97706"

[borderRadius]
none = "0px"
DEFAULT = "0.25rem"
lg = "0.5rem"
full = "9999px"

[borderWidth]
0 = "0px"
DEFAULT = "1px"
2 = "2px"

[ringWidth]
DEFAULT = "3px"
2 = "2px"

[opacity]
0 = "0"
25 = "0.25"
50 = "0.5"
75 = "0.75"
100 = "1"

[zIndex]
0 = "0"
10 = "10"
50 = "50"
auto = "auto"
"##;

/// Parse [`DEFAULT_THEME`] into a layer
pub fn default_base() -> Result<ThemeLayer, ConfigError> {
    let raw: RawLayer = toml::from_str(DEFAULT_THEME)?;
    ThemeLayer::from_raw(&raw)
}
