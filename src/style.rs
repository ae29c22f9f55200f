// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Licenser Contributors

use std::collections::BTreeMap;
use std::path::Path;

use cu::pre::*;

/// How a license is wrapped in comments for a kind of file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CommentStyle {
    /// The `// ...` format
    Slash,
    /// The `# ...` format
    Hash,
    /// The `-- ...` format
    Dash,
    /// The `% ...` format
    Percent,
    /// The `/* ... */` format, with ` * ` on each line in between
    Block,
}

static SLASH_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cs", "cxx", "dart", "go", "groovy", "h", "hpp", "java", "js", "jsx", "kt",
    "kts", "proto", "rs", "scala", "swift", "ts", "tsx", "zig",
];

static HASH_EXTENSIONS: &[&str] = &[
    "bash", "bzl", "cmake", "mk", "nix", "pl", "pm", "ps1", "py", "r", "rb", "sh", "tcl", "tf",
    "toml", "yaml", "yml", "zsh",
];

static DASH_EXTENSIONS: &[&str] = &["ada", "elm", "hs", "lua", "sql"];

static PERCENT_EXTENSIONS: &[&str] = &["erl", "hrl", "m", "tex"];

static BLOCK_EXTENSIONS: &[&str] = &["css", "less", "scss"];

impl CommentStyle {
    pub const ALL: [Self; 5] = [
        Self::Slash,
        Self::Hash,
        Self::Dash,
        Self::Percent,
        Self::Block,
    ];

    /// Name used in `--style` overrides
    pub fn name(self) -> &'static str {
        match self {
            Self::Slash => "slash",
            Self::Hash => "hash",
            Self::Dash => "dash",
            Self::Percent => "percent",
            Self::Block => "block",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|x| x.name() == name)
    }

    /// Comma separated list of all style names
    pub fn all_names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }

    fn builtin_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Slash => SLASH_EXTENSIONS,
            Self::Hash => HASH_EXTENSIONS,
            Self::Dash => DASH_EXTENSIONS,
            Self::Percent => PERCENT_EXTENSIONS,
            Self::Block => BLOCK_EXTENSIONS,
        }
    }

    /// (opening line, line prefix, closing line)
    fn markers(self) -> (Option<&'static str>, &'static str, Option<&'static str>) {
        match self {
            Self::Slash => (None, "//", None),
            Self::Hash => (None, "#", None),
            Self::Dash => (None, "--", None),
            Self::Percent => (None, "%", None),
            Self::Block => (Some("/*"), " *", Some(" */")),
        }
    }

    /// Wrap every line of `text` in this comment style.
    ///
    /// Empty lines keep the bare marker, and trailing whitespace is
    /// trimmed. The output always ends with a line ending.
    pub fn wrap(self, text: &str) -> String {
        let (open, prefix, close) = self.markers();
        let mut buf = String::with_capacity(text.len() + text.lines().count() * 4 + 8);
        if let Some(open) = open {
            buf.push_str(open);
            buf.push('\n');
        }
        for line in text.lines() {
            let line = line.trim_end();
            buf.push_str(prefix);
            if !line.is_empty() {
                buf.push(' ');
                buf.push_str(line);
            }
            buf.push('\n');
        }
        if let Some(close) = close {
            buf.push_str(close);
            buf.push('\n');
        }
        buf
    }
}

/// Extension to comment style mapping, with user overrides applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: BTreeMap<String, CommentStyle>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        let mut styles = BTreeMap::new();
        for style in CommentStyle::ALL {
            for ext in style.builtin_extensions() {
                styles.insert(ext.to_string(), style);
            }
        }
        Self { styles }
    }
}

impl StyleRegistry {
    /// Create the registry from the built-in table plus `overrides`,
    /// each in the `<extension>:<style>` format
    pub fn with_overrides<S: AsRef<str>>(
        overrides: impl IntoIterator<Item = S>,
    ) -> cu::Result<Self> {
        let mut registry = Self::default();
        for token in overrides {
            registry.register_override(token.as_ref())?;
        }
        Ok(registry)
    }

    /// Parse an `<extension>:<style>` token and install it, replacing
    /// any existing mapping for the extension
    pub fn register_override(&mut self, token: &str) -> cu::Result<()> {
        let (ext, name) = cu::check!(
            token.split_once(':'),
            "invalid style override '{token}': expected <extension>:<style>"
        )?;
        let ext = ext.trim().trim_start_matches('.');
        if ext.is_empty() {
            cu::bail!("invalid style override '{token}': extension is empty");
        }
        let name = name.trim();
        let Some(style) = CommentStyle::from_name(name) else {
            cu::bail!(
                "invalid style override '{token}': unknown style '{name}', available styles are {}",
                CommentStyle::all_names()
            );
        };
        if let Some(old) = self.styles.insert(ext.to_string(), style) {
            cu::debug!("style for '.{ext}' changed from {} to {}", old.name(), style.name());
        }
        Ok(())
    }

    /// Get the style registered for the extension
    pub fn style_for(&self, ext: &str) -> Option<CommentStyle> {
        self.styles.get(ext).copied()
    }

    /// Get the style for a file from its extension
    pub fn style_for_path(&self, path: &Path) -> Option<CommentStyle> {
        let ext = path.extension().and_then(|x| x.to_str())?;
        self.style_for(ext)
    }

    /// Describe every registered extension and its style, one per line
    pub fn all_styles(&self) -> String {
        let mut out = String::new();
        for (ext, style) in &self.styles {
            out.push_str(ext);
            out.push(':');
            out.push_str(style.name());
            out.push('\n');
        }
        out
    }
}
