//! Inspect command: summarize sections and fields of a layout.

use crate::cli::common::{resolve_seed, to_json, CliResult};
use crate::config::Config;
use crate::store::{LayoutStore, LayoutView};
use clap::Args;
use std::path::PathBuf;

/// Show sections, fields and visibility counts of a layout
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Seed definition or exported document (defaults to the configured seed)
    #[arg(short, long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Output the full view as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let layout = resolve_seed(self.seed.as_deref(), config)?;
        let view = LayoutStore::new(layout).view();

        if self.json {
            println!("{}", to_json(&view)?);
        } else {
            print!("{}", render_text(&view));
        }

        Ok(())
    }
}

/// Human-readable summary, one block per section.
fn render_text(view: &LayoutView) -> String {
    let mut out = String::new();

    for section in &view.sections {
        let state = if section.expanded { "expanded" } else { "collapsed" };
        out.push_str(&format!(
            "{} ({state}): {} visible, {} hidden\n",
            section.name, section.visible_count, section.hidden_count
        ));

        for (index, field) in section.fields.iter().enumerate() {
            let marker = if field.visible { "✓" } else { "✗" };
            let label = if field.spacer { "(spacer)" } else { field.label.as_str() };
            out.push_str(&format!("  {:>2}. {marker} {:<24} {label}\n", index + 1, field.id));
        }

        out.push('\n');
    }

    out.push_str(&format!("Hidden fields: {}\n", view.hidden_count));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Layout, Section};

    #[test]
    fn test_render_text() {
        let section = Section::new("Customer Success")
            .with_field(Field::new("sentiment", "Sentiment"))
            .unwrap()
            .with_field(Field::spacer("spacer_1"))
            .unwrap()
            .with_field(Field::new("risk", "Risk").with_visible(false))
            .unwrap();
        let view = LayoutStore::new(Layout::new(vec![section]).unwrap()).view();

        let text = render_text(&view);
        assert!(text.starts_with("Customer Success (expanded): 1 visible, 1 hidden\n"));
        assert!(text.contains("(spacer)"));
        assert!(text.contains("✗ risk"));
        assert!(text.ends_with("Hidden fields: 1\n"));
    }
}
