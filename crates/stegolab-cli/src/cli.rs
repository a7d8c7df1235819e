use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Analyze(analyze::AnalyzeArgs),
    Capacity(capacity::CapacityArgs),
}

/// renders a PSNR value, identical images yield `inf`
pub fn format_psnr(psnr: f64) -> String {
    format!("{psnr:.2} dB")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn should_have_a_consistent_command_line() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_hide_with_defaults() {
        let args = CliArgs::parse_from(["stegolab", "hide", "-i", "cat.png", "-m", "hi"]);
        let Commands::Hide(hide) = args.command else {
            panic!("expected the hide command");
        };

        assert_eq!(hide.message, "hi");
        assert_eq!(hide.payload, 1.0);
        assert!(hide.write_to_file.is_none());
        assert!(!hide.strict);
    }

    #[test]
    fn should_default_the_analysis_output_dir() {
        let args = CliArgs::parse_from([
            "stegolab", "analyze", "--cover", "c.png", "--stego", "s.png",
        ]);
        let Commands::Analyze(analyze) = args.command else {
            panic!("expected the analyze command");
        };

        assert_eq!(analyze.output_dir, std::path::PathBuf::from("./results"));
    }

    #[test]
    fn should_render_infinite_psnr() {
        assert_eq!(format_psnr(f64::INFINITY), "inf dB");
        assert_eq!(format_psnr(51.234), "51.23 dB");
    }
}
