// ABOUTME: Command line front end for the Peptidion store
// ABOUTME: Profile, onboarding, catalog, journal and directory commands over the configured backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

//! # Peptidion CLI
//!
//! ```bash
//! # Walk the standard intake in one go
//! peptidion-cli onboard standard --goal fat_loss --goal recovery --experience intermediate
//!
//! # Top three catalog entries for the stored goals
//! peptidion-cli recommend
//!
//! # Use a throwaway store
//! PEPTIDION_STORAGE_URL=memory: peptidion-cli catalog list --category recovery
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use peptidion::config::AppConfig;
use peptidion::models::{
    ActivityLevel, ExperienceLevel, Gender, PeptideCategory, PeptideHistory, PhotoType,
    ResultsHorizon, UserGoal, UserRole,
};
use peptidion::settings::SettingsEdits;
use peptidion::store::UserStore;

#[derive(Parser)]
#[command(
    name = "peptidion-cli",
    about = "Peptidion peptide education and progress tracking",
    long_about = "Manage the local Peptidion profile, journal and favorites, browse the catalog and get recommendations"
)]
struct Cli {
    /// Storage URL override (sqlite:path or memory:)
    #[arg(long, global = true)]
    storage_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show or edit the profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Run onboarding non-interactively
    #[command(subcommand)]
    Onboard(OnboardCommand),
    /// Browse the peptide catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),
    /// Top recommendations for the stored goals
    Recommend,
    /// Manage favorite catalog entries
    #[command(subcommand)]
    Favorite(FavoriteCommand),
    /// Track protocol cycles
    #[command(subcommand)]
    Cycle(CycleCommand),
    /// Progress photos
    #[command(subcommand)]
    Photo(PhotoCommand),
    /// Body measurements
    #[command(subcommand)]
    Stats(StatsCommand),
    /// Coach and doctor directory
    Coaches {
        /// all, coach or doctor
        #[arg(long, default_value = "all")]
        role: String,
        /// Match against name or specialty
        #[arg(long, default_value = "")]
        query: String,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Print the profile with level and avatar
    Show,
    /// Update profile fields; blank text clears a field
    Set {
        #[arg(long, value_parser = commands::parse_enum::<UserRole>)]
        role: Option<UserRole>,
        /// Replace the goals (repeat up to three times)
        #[arg(long = "goal", value_parser = commands::parse_enum::<UserGoal>)]
        goals: Vec<UserGoal>,
        #[arg(long, value_parser = commands::parse_enum::<ExperienceLevel>)]
        experience: Option<ExperienceLevel>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        body_fat: Option<f64>,
        #[arg(long, value_parser = commands::parse_enum::<Gender>)]
        gender: Option<Gender>,
        /// Photo analysis credential
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        scheduling_link: Option<String>,
        #[arg(long)]
        specialty: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        hourly_rate: Option<String>,
        #[arg(long)]
        instagram: Option<String>,
        #[arg(long)]
        twitter: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
    },
}

#[derive(Subcommand)]
enum OnboardCommand {
    /// Standard user intake
    Standard {
        /// Goal to select (up to three)
        #[arg(long = "goal", required = true, value_parser = commands::parse_enum::<UserGoal>)]
        goals: Vec<UserGoal>,
        #[arg(long, default_value = "3-6", value_parser = commands::parse_enum::<ResultsHorizon>)]
        expected: ResultsHorizon,
        #[arg(long, default_value = "no", value_parser = commands::parse_enum::<PeptideHistory>)]
        history: PeptideHistory,
        #[arg(long, default_value = "")]
        weight: String,
        #[arg(long, default_value = "")]
        height: String,
        #[arg(long, default_value = "")]
        body_fat: String,
        #[arg(long, default_value = "moderate", value_parser = commands::parse_enum::<ActivityLevel>)]
        activity: ActivityLevel,
        #[arg(long, default_value = "beginner", value_parser = commands::parse_enum::<ExperienceLevel>)]
        experience: ExperienceLevel,
        #[arg(long)]
        tracking: bool,
        #[arg(long)]
        coaching: bool,
        #[arg(long, default_value = "male", value_parser = commands::parse_enum::<Gender>)]
        gender: Gender,
    },
    /// Coach or doctor intake
    Professional {
        /// coach or doctor
        #[arg(long)]
        role: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        specialty: String,
        #[arg(long)]
        bio: String,
        #[arg(long, default_value = "")]
        rate: String,
        #[arg(long, default_value = "")]
        link: String,
    },
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// List entries, optionally filtered
    List {
        #[arg(long, value_parser = commands::parse_category)]
        category: Option<PeptideCategory>,
        #[arg(long)]
        query: Option<String>,
    },
    /// Show one entry
    Show { id: String },
    /// Categories with their entry counts
    Categories,
}

#[derive(Subcommand)]
enum FavoriteCommand {
    /// Add or remove a catalog entry
    Toggle { id: String },
    /// List favorite entries
    List,
}

#[derive(Subcommand)]
enum CycleCommand {
    /// Start a cycle of a catalog entry
    Start { peptide_id: String },
    /// End a running cycle
    End { id: String },
    /// List cycles
    List {
        #[arg(long)]
        active: bool,
    },
}

#[derive(Subcommand)]
enum PhotoCommand {
    /// Save a progress photo
    Add {
        path: PathBuf,
        #[arg(long = "type", value_parser = commands::parse_enum::<PhotoType>)]
        photo_type: PhotoType,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        body_fat: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
        /// Rate the photo first (needs a credential)
        #[arg(long)]
        analyze: bool,
    },
    /// List photos, newest first
    List {
        #[arg(long = "type", value_parser = commands::parse_enum::<PhotoType>)]
        photo_type: Option<PhotoType>,
    },
}

#[derive(Subcommand)]
enum StatsCommand {
    /// Record a measurement
    Add {
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        body_fat: Option<f64>,
        #[arg(long)]
        muscle_mass: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List measurements, newest first
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(url) = cli.storage_url {
        config.storage_url = url;
    }

    let level = if cli.verbose { "debug" } else { "info" };
    peptidion::logging::init(config.log_format, level);

    if let Some(parent) = config.sqlite_path().as_deref().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Cannot create data directory {}", parent.display()))?;
        }
    }

    debug!(storage_url = %config.storage_url, "Opening store");
    let backend = peptidion::storage::connect(&config.storage_url)
        .await
        .context("Cannot open storage")?;
    let store = UserStore::open(backend, config.store)
        .await
        .context("Cannot load user store")?;

    run(cli.command, &store, &config).await?;
    Ok(())
}

#[allow(clippy::too_many_lines)]
async fn run(command: Command, store: &UserStore, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Command::Profile(ProfileCommand::Show) => commands::profile::show(store)?,
        Command::Profile(ProfileCommand::Set {
            role,
            goals,
            experience,
            name,
            age,
            weight,
            height,
            body_fat,
            gender,
            api_key,
            scheduling_link,
            specialty,
            bio,
            hourly_rate,
            instagram,
            twitter,
            linkedin,
        }) => {
            commands::profile::set(
                store,
                SettingsEdits {
                    role,
                    goals,
                    experience,
                    name,
                    age,
                    weight,
                    height,
                    body_fat,
                    gender,
                    api_key,
                    scheduling_link,
                    specialty,
                    bio,
                    hourly_rate,
                    instagram,
                    twitter,
                    linkedin,
                },
            )
            .await?;
        }
        Command::Onboard(OnboardCommand::Standard {
            goals,
            expected,
            history,
            weight,
            height,
            body_fat,
            activity,
            experience,
            tracking,
            coaching,
            gender,
        }) => {
            commands::onboarding::standard(
                store,
                commands::onboarding::StandardAnswers {
                    goals,
                    expected,
                    history,
                    weight,
                    height,
                    body_fat,
                    activity,
                    experience,
                    tracking,
                    coaching,
                    gender,
                },
            )
            .await?;
        }
        Command::Onboard(OnboardCommand::Professional {
            role,
            name,
            specialty,
            bio,
            rate,
            link,
        }) => {
            commands::onboarding::professional(
                store,
                commands::onboarding::ProfessionalAnswers {
                    role,
                    name,
                    specialty,
                    bio,
                    rate,
                    link,
                },
            )
            .await?;
        }
        Command::Catalog(CatalogCommand::List { category, query }) => {
            commands::catalog::list(store, category, query)?;
        }
        Command::Catalog(CatalogCommand::Show { id }) => commands::catalog::show(store, &id)?,
        Command::Catalog(CatalogCommand::Categories) => commands::catalog::categories()?,
        Command::Recommend => commands::catalog::recommend(store)?,
        Command::Favorite(FavoriteCommand::Toggle { id }) => {
            commands::catalog::toggle_favorite(store, &id).await?;
        }
        Command::Favorite(FavoriteCommand::List) => commands::catalog::favorites(store)?,
        Command::Cycle(CycleCommand::Start { peptide_id }) => {
            commands::journal::start_cycle(store, &peptide_id).await?;
        }
        Command::Cycle(CycleCommand::End { id }) => commands::journal::end_cycle(store, &id).await?,
        Command::Cycle(CycleCommand::List { active }) => commands::journal::cycles(store, active)?,
        Command::Photo(PhotoCommand::Add {
            path,
            photo_type,
            weight,
            body_fat,
            notes,
            analyze,
        }) => {
            commands::journal::add_photo(
                store,
                config,
                commands::journal::PhotoInput {
                    path,
                    photo_type,
                    weight,
                    body_fat,
                    notes,
                    analyze,
                },
            )
            .await?;
        }
        Command::Photo(PhotoCommand::List { photo_type }) => {
            commands::journal::photos(store, photo_type)?;
        }
        Command::Stats(StatsCommand::Add {
            weight,
            body_fat,
            muscle_mass,
            notes,
        }) => {
            commands::journal::add_stat(store, weight, body_fat, muscle_mass, notes).await?;
        }
        Command::Stats(StatsCommand::List) => commands::journal::stats(store)?,
        Command::Coaches { role, query } => commands::coaches::list(&role, &query)?,
    }
    Ok(())
}
