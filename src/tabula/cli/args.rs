use clap::Parser;
use std::path::PathBuf;
use std::sync::OnceLock;
use tabula::error::Result;
use tabula::style::{Border, GlyphOverrides, StyleOptions};

/// Formats `--version` output. Tagged release builds, and builds made outside a git
/// checkout, show the bare package version; anything else appends the commit it was
/// built from, e.g. `0.3.2@abc1234 2024-01-15 14:30`.
fn format_version(version: &str, hash: &str, commit_date: &str, is_release: bool) -> String {
    if is_release || hash.is_empty() {
        return version.to_string();
    }
    let mut out = format!("{version}@{hash}");
    if !commit_date.is_empty() {
        out.push(' ');
        out.push_str(commit_date);
    }
    out
}

fn version_string() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        format_version(
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH"),
            env!("GIT_COMMIT_DATE"),
            env!("IS_RELEASE") == "true",
        )
    })
}

#[derive(Parser, Debug)]
#[command(name = "tabula", bin_name = "tabula", version = version_string())]
#[command(about = "Render delimited text rows as an aligned table", long_about = None)]
pub struct Cli {
    /// Input file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Border style: none, ascii, line or double_line
    #[arg(short, long)]
    pub border: Option<String>,

    /// Override a single border glyph, e.g. --glyph vertical=: (repeatable)
    #[arg(long = "glyph", value_name = "NAME=CHAR")]
    pub glyphs: Vec<String>,

    /// Spaces on each side of a cell
    #[arg(short, long)]
    pub padding: Option<usize>,

    /// Body justification: left, right or center
    #[arg(short, long)]
    pub justify: Option<String>,

    /// Header justification: left, right or center
    #[arg(long)]
    pub justify_header: Option<String>,

    /// Draw a separator between every body row
    #[arg(short, long)]
    pub separate_rows: bool,

    /// Treat the first input row as the header
    #[arg(short = 'H', long)]
    pub header: bool,

    /// Cell delimiter within a row
    #[arg(short, long, default_value_t = '\t')]
    pub delimiter: char,

    /// Indent the table by this many levels
    #[arg(short, long, default_value_t = 0)]
    pub indent: usize,

    /// Directory holding config.json (defaults to $TABULA_CONFIG_DIR or the platform config dir)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layers command-line flags over the configured defaults.
    pub fn style_options(&self, mut options: StyleOptions) -> Result<StyleOptions> {
        if let Some(border) = &self.border {
            options.border = Border::Named(border.clone());
        }
        if !self.glyphs.is_empty() {
            options.border = self.custom_border(&options.border);
        }
        if let Some(padding) = self.padding {
            options.padding = padding;
        }
        if let Some(justify) = &self.justify {
            options.justify = justify.parse()?;
        }
        if let Some(justify) = &self.justify_header {
            options.justify_header = justify.parse()?;
        }
        if self.separate_rows {
            options.separate_rows = true;
        }
        Ok(options)
    }

    /// Merges `--glyph` overrides over the current border. An entry without `=`
    /// clears that glyph.
    fn custom_border(&self, current: &Border) -> Border {
        let mut overrides = match current {
            Border::Named(id) => GlyphOverrides {
                base: Some(id.clone()),
                ..GlyphOverrides::default()
            },
            Border::Custom(existing) => existing.clone(),
        };
        for entry in &self.glyphs {
            let (name, value) = entry.split_once('=').unwrap_or((entry.as_str(), ""));
            overrides.glyphs.insert(name.to_string(), value.to_string());
        }
        Border::Custom(overrides)
    }
}
