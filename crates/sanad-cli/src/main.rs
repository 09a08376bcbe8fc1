//! `sanad` — command-line front end for the Saylani registration portal.
//!
//! # Usage
//!
//! ```
//! sanad register --name "Ali Khan" --cnic 42101-1234567-1 \
//!   --email ali@example.com --phone 03001234567 \
//!   --address "House 1, Karachi" --program "Graphic Design" \
//!   --photo ali.png
//! sanad card K3J9X2M1Q --qr-out ./cards
//! sanad chat
//! ```

mod app;

use std::{
  io::{self, BufRead, Write as _},
  path::{Path, PathBuf},
};

use anyhow::{Context as _, bail};
use app::{App, Route};
use clap::{Parser, Subcommand};
use sanad_assistant::{ChatSession, GeminiClient, answer_once};
use sanad_card::{encode, render, share};
use sanad_core::{
  chat::ChatMessage,
  photo,
  program::Program,
  registration::SubmissionDraft,
};
use sanad_store::{FileSlot, RegistrationStore};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "sanad", about = "Saylani student registration portal")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Directory holding the registration slot (overrides the config file).
  #[arg(long)]
  data_dir: Option<PathBuf>,

  /// Gemini API key (overrides the config file).
  #[arg(long, env = "SANAD_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Submit a registration and show the issued card.
  Register {
    #[arg(long)]
    name:    String,
    #[arg(long)]
    cnic:    String,
    #[arg(long)]
    email:   String,
    #[arg(long)]
    phone:   String,
    #[arg(long)]
    address: String,
    /// Program display name, e.g. "Graphic Design".
    #[arg(long)]
    program: String,
    /// Path to a passport-style photo (max 2 MiB).
    #[arg(long)]
    photo:   Option<PathBuf>,
  },
  /// List stored registrations, most recent first.
  List,
  /// Show the ID card for a registration.
  Card {
    id:     String,
    /// Fetch the verification QR image into this directory.
    #[arg(long)]
    qr_out: Option<PathBuf>,
  },
  /// Print the built-in FAQ list.
  Faqs,
  /// Ask the assistant a one-off question.
  Ask { question: String },
  /// Interactive support chat.
  Chat,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Debug, Clone, Deserialize)]
struct Settings {
  #[serde(default = "default_data_dir")]
  data_dir: PathBuf,
  #[serde(default)]
  api_key:  String,
  #[serde(default)]
  model:    Option<String>,
}

fn default_data_dir() -> PathBuf { PathBuf::from("data") }

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration: file, then SANAD_* environment, then flags.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("SANAD"))
    .build()
    .context("failed to read config")?;
  let mut settings: Settings = settings
    .try_deserialize()
    .context("failed to deserialise settings")?;

  if let Some(dir) = cli.data_dir {
    settings.data_dir = dir;
  }
  if let Some(key) = cli.api_key {
    settings.api_key = key;
  }

  // Open the store.
  let slot = FileSlot::open(&settings.data_dir).with_context(|| {
    format!("failed to open data dir {:?}", settings.data_dir)
  })?;
  let store = RegistrationStore::open(slot).context("failed to open store")?;
  let mut app = App::new(store);

  match cli.command {
    Command::Register { name, cnic, email, phone, address, program, photo } => {
      app.navigate(Route::Register);
      let draft = SubmissionDraft {
        full_name: name,
        cnic,
        email,
        phone,
        address,
        program,
        profile_image: photo.map(|p| load_photo(&p)).transpose()?,
      };
      register(&mut app, &draft)
    }
    Command::List => {
      list(&app);
      Ok(())
    }
    Command::Card { id, qr_out } => card(&mut app, &id, qr_out.as_deref()).await,
    Command::Faqs => {
      app.navigate(Route::Faqs);
      faqs(&app);
      Ok(())
    }
    Command::Ask { question } => {
      let client = gemini_client(&settings)?;
      println!("{}", answer_once(&client, &question).await);
      Ok(())
    }
    Command::Chat => {
      app.navigate(Route::SupportChat);
      let client = gemini_client(&settings)?;
      chat(&mut app, &client).await
    }
  }
}

fn gemini_client(settings: &Settings) -> anyhow::Result<GeminiClient> {
  if settings.api_key.is_empty() {
    bail!(
      "no Gemini API key configured; set api_key in config.toml or \
       SANAD_API_KEY"
    );
  }
  let client = GeminiClient::new(&settings.api_key)
    .context("failed to build assistant client")?;
  Ok(match &settings.model {
    Some(model) => client.with_model(model),
    None => client,
  })
}

/// Read and encode a photo file, mapping the size limit to a form error.
fn load_photo(path: &Path) -> anyhow::Result<String> {
  let bytes = std::fs::read(path)
    .with_context(|| format!("reading photo {}", path.display()))?;
  let media_type = match path.extension().and_then(|e| e.to_str()) {
    Some("jpg") | Some("jpeg") => "image/jpeg",
    Some("webp") => "image/webp",
    _ => "image/png",
  };
  photo::encode_profile_image(&bytes, media_type)
    .context("photo rejected")
}

// ─── Commands ─────────────────────────────────────────────────────────────────

fn register(
  app: &mut App<FileSlot>,
  draft: &SubmissionDraft,
) -> anyhow::Result<()> {
  debug_assert_eq!(app.route(), Route::Register);
  match app.submit_registration(draft) {
    Err(errors) => {
      eprintln!("Registration refused:");
      for (field, message) in errors.iter() {
        eprintln!("  {}: {}", field.as_str(), message);
      }
      bail!("{} field(s) failed validation", errors.len());
    }
    Ok(reg) => {
      println!("Congratulations! Your registration is successful.");
      println!("Your data is saved locally on this device.");
      println!();
      print_card(reg);
      println!();
      println!("Share: {}", share::whatsapp_share_url(reg));
      Ok(())
    }
  }
}

fn list(app: &App<FileSlot>) {
  if app.store().is_empty() {
    println!("No registrations yet.");
    return;
  }
  for reg in app.store().registrations() {
    println!(
      "{}  {:24}  {:28}  {}",
      reg.id, reg.full_name, reg.program, reg.issue_date
    );
  }
}

async fn card(
  app: &mut App<FileSlot>,
  id: &str,
  qr_out: Option<&Path>,
) -> anyhow::Result<()> {
  let Some(reg) = app.view_card(id) else {
    bail!("no registration with id {id:?}");
  };
  print_card(reg);
  println!();
  println!("Share: {}", share::whatsapp_share_url(reg));

  if let Some(dir) = qr_out {
    match fetch_qr(reg, dir).await {
      Ok(path) => println!("Saved QR image to {}", path.display()),
      // Recoverable: the card is still printable without the saved image.
      Err(e) => tracing::warn!(
        error = %e,
        "could not fetch the QR image; open the URL above in a browser \
         or use the Print option"
      ),
    }
  }
  Ok(())
}

/// Download the verification QR from the external image service.
async fn fetch_qr(
  reg: &sanad_core::registration::Registration,
  dir: &Path,
) -> anyhow::Result<PathBuf> {
  let url = encode::qr_image_url(&encode::verification_payload(reg));
  let resp = reqwest::get(&url).await.context("QR service request failed")?;
  if !resp.status().is_success() {
    bail!("QR service returned {}", resp.status());
  }
  let bytes = resp.bytes().await.context("reading QR image body")?;

  std::fs::create_dir_all(dir)?;
  let path = dir.join(format!("{}-qr.png", reg.id));
  std::fs::write(&path, &bytes)
    .with_context(|| format!("writing {}", path.display()))?;
  Ok(path)
}

fn faqs(app: &App<FileSlot>) {
  for faq in app.faqs() {
    println!("[{}] {}", faq.category, faq.question);
    println!("    {}", faq.answer);
    println!();
  }
  println!("Still have questions? Try `sanad chat`.");
}

async fn chat(
  app: &mut App<FileSlot>,
  client: &GeminiClient,
) -> anyhow::Result<()> {
  let mut session = ChatSession::support();

  for message in app.transcript() {
    println!("assistant> {}", message.text);
  }
  println!("(empty line to quit)");

  let stdin = io::stdin();
  loop {
    print!("you> ");
    io::stdout().flush().ok();

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
      break;
    }
    let text = line.trim();
    if text.is_empty() {
      break;
    }

    app.append_message(ChatMessage::user(text));
    let reply = session.send(client, text).await;
    app.append_message(ChatMessage::model(reply.clone()));
    println!("assistant> {reply}");
  }

  Ok(())
}

fn print_card(reg: &sanad_core::registration::Registration) {
  let view = render(reg);
  let payload = encode::verification_payload(reg);

  println!("┌──────────────────────────────────────────────┐");
  println!("│ {} — {}", view.header.org_name, view.header.title);
  println!("│ {}", view.header.id_badge);
  println!("├──────────────────────────────────────────────┤");
  println!("│ Full Name : {}", view.identity.full_name);
  println!("│ Program   : {}", view.identity.program);
  println!("│ CNIC      : {}", view.identity.cnic);
  println!("│ Issued On : {}", view.issue_date);
  match &view.photo {
    sanad_card::render::PhotoSource::Uploaded(_) => {
      println!("│ Photo     : (uploaded)");
    }
    sanad_card::render::PhotoSource::Placeholder(url) => {
      println!("│ Photo     : {url}");
    }
  }
  println!("└──────────────────────────────────────────────┘");
  println!("Verification payload:");
  for line in payload.lines() {
    println!("  {line}");
  }
  println!("QR image: {}", view.qr.image_url);
}
