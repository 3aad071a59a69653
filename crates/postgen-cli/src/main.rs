use std::io::{self, IsTerminal, Read};

use clap::{builder::ArgAction, Parser, Subcommand};
use clipboard::CopyOutcome;
use console::{style, Emoji};
use errors::PostgenCliErrors;
use postgen::{FormattedPost, Platform, PostRequest};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

mod clipboard;
pub mod errors;

static PENCIL: Emoji<'_, '_> = Emoji("📝 ", "");
static GLOBE: Emoji<'_, '_> = Emoji("🌐 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✨ ", "");
static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");

#[derive(Parser)]
#[command(author, version, about = "Generate platform-formatted social media posts")]
struct Cli {
  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Format a message as a post for one platform
  Generate {
    /// The message to post; read from stdin or prompted for when omitted
    text:     Option<String>,
    /// Target platform (linkedin, twitter, instagram)
    #[arg(long, short)]
    platform: Option<Platform>,
    /// Copy the generated post to the clipboard
    #[arg(long, short)]
    copy:     bool,
    /// Print the post as JSON, with its character count and limit check
    #[arg(long, conflicts_with = "plain")]
    json:     bool,
    /// Print only the generated post
    #[arg(long)]
    plain:    bool,
  },
  /// List supported platforms and their guidelines
  Platforms,
  /// Serve text read from stdin on the clipboard until it is replaced
  #[command(name = "clipboard-serve", hide = true)]
  ClipboardServe,
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  // Logs go to stderr so `--plain` and `--json` output stays clean
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Collect the message and platform for `generate`, prompting when running
/// interactively and falling back to stdin when input is piped in.
fn read_request(
  text: Option<String>,
  platform: Option<Platform>,
) -> Result<PostRequest, PostgenCliErrors> {
  if let Some(text) = text {
    return Ok(PostRequest::new(text, platform.unwrap_or(Platform::LinkedIn)));
  }

  if !io::stdin().is_terminal() {
    trace!("Reading message from stdin");
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    // Drop the line ending a pipe adds, keep everything else as written
    let text = text.strip_suffix('\n').map_or(text.as_str(), |t| t.strip_suffix('\r').unwrap_or(t));
    return Ok(PostRequest::new(text, platform.unwrap_or(Platform::LinkedIn)));
  }

  let text = dialoguer::Input::<String>::new()
    .with_prompt(format!("{} What do you want to post?", style(PENCIL).cyan()))
    .allow_empty(true)
    .interact_text()?;

  let platform = match platform {
    Some(platform) => platform,
    None => {
      let names = Platform::ALL.map(|p| p.display_name());
      let selection = dialoguer::Select::new()
        .with_prompt(format!("{} Select platform", style(GLOBE).cyan()))
        .items(&names)
        .default(0)
        .interact()?;
      Platform::ALL[selection]
    },
  };

  Ok(PostRequest::new(text, platform))
}

/// Print a generated post with its character count and limit warning.
fn print_post(post: &FormattedPost) {
  println!(
    "\n{} Generated Post for {}\n",
    style(SUCCESS).green(),
    style(post.platform()).cyan().bold()
  );
  println!("{}", style(post).white());
  println!("\n{} {}", style("Character count:").dim(), style(post.character_count()).yellow());

  if post.exceeds_limit() {
    if let Some(limit) = post.platform().character_limit() {
      println!(
        "{} {}",
        style(WARNING).red(),
        style(format!(
          "Post exceeds {}'s {} character limit",
          post.platform().display_name(),
          limit
        ))
        .red()
      );
    }
  }
}

fn main() -> Result<(), PostgenCliErrors> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  match cli.command {
    Commands::Generate { text, platform, copy, json, plain } => {
      let request = read_request(text, platform)?;
      trace!("Generating post for {}", request.platform);

      if request.is_blank() {
        eprintln!("{} Nothing to generate, enter a message first", style(WARNING).yellow());
        return Ok(());
      }

      let post = request.format();
      debug!("Generated post: {:?}", post);

      if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
      } else if plain {
        println!("{post}");
      } else {
        print_post(&post);
      }

      if copy {
        match clipboard::copy_text(post.text()) {
          CopyOutcome::Copied => eprintln!("{} {}", style(CHECK).green(), style("Copied!").green()),
          CopyOutcome::Failed(reason) => eprintln!(
            "{} Could not copy to clipboard: {}",
            style(WARNING).yellow(),
            style(reason).yellow()
          ),
        }
      }
      Ok(())
    },

    Commands::Platforms => {
      println!("{} Platform Guidelines", style(GLOBE).cyan());
      for platform in Platform::ALL {
        println!(
          "\n{} ({})",
          style(platform.display_name()).cyan().bold(),
          style(platform.as_str()).yellow()
        );
        println!("   {}", style(platform.guideline()).white());
        if let Some(limit) = platform.character_limit() {
          println!("   {} {}", style("Character limit:").dim(), style(limit).yellow());
        }
      }
      Ok(())
    },

    Commands::ClipboardServe => Ok(clipboard::serve(io::stdin(), io::stdout())?),
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_clipboard_serve_name_matches_helper() {
    let cli = Cli::command();
    let serve = cli.find_subcommand(clipboard::SERVE_COMMAND).unwrap();
    assert!(serve.is_hide_set());
  }
}
