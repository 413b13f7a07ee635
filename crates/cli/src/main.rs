mod synthetic;

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use colored::Colorize;
use directory::{DirectoryIndex, MemberId, MemberRecord, load_snapshot, load_swap_requests};
use pipeline::{
    Availability, DirectorySummary, DirectoryView, FeaturedSelector, FilterCriteria,
    SKILL_CATEGORIES, pending_for,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Number of offered skills shown per member before "+N"
const PREVIEW_SKILLS: usize = 2;

/// SkillSwap - browse the member directory
#[derive(Parser)]
#[command(name = "skill-swap")]
#[command(about = "Search, filter and rank the skill-swap member directory", long_about = None)]
struct Cli {
    /// Path to a JSON snapshot of the member directory
    #[arg(short, long, env = "SKILL_SWAP_SNAPSHOT", default_value = "data/members.json")]
    snapshot: PathBuf,

    /// Id of the member viewing the directory (excluded from listings)
    #[arg(short, long, env = "SKILL_SWAP_VIEWER")]
    viewer: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List members matching a search and filters
    Browse {
        /// Text to look for in names and skills (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Skill category, matched as a substring of offered skills
        #[arg(long, default_value = "All")]
        category: String,

        /// All, Available, Busy or Offline
        #[arg(long, default_value = "All")]
        availability: Availability,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the top-rated members
    Featured {
        /// Minimum rating to be featured
        #[arg(long, default_value_t = FeaturedSelector::DEFAULT_MIN_RATING)]
        min_rating: f64,

        /// Maximum number of featured members
        #[arg(long, default_value_t = FeaturedSelector::DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Show directory-wide counts
    Summary,

    /// Count pending swap requests addressed to the viewer
    Inbox {
        /// Path to a JSON list of swap requests
        #[arg(long)]
        requests: PathBuf,
    },

    /// Write a reproducible synthetic snapshot
    Generate {
        /// Number of members to generate
        #[arg(long, default_value = "50")]
        count: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output file
        #[arg(long)]
        output: PathBuf,
    },

    /// Time view computation over a synthetic directory
    Benchmark {
        /// Size of the synthetic directory
        #[arg(long, default_value = "10000")]
        members: usize,

        /// Number of view computations to time
        #[arg(long, default_value = "100")]
        iterations: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let viewer = cli.viewer.map(MemberId::from);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            search,
            category,
            availability,
            json,
        } => {
            let index = load_index(&cli.snapshot, viewer)?;
            let criteria = FilterCriteria::new()
                .with_search(search.as_deref())
                .with_category(category)
                .with_availability(availability);
            handle_browse(&index, &criteria, json)?
        }
        Commands::Featured { min_rating, limit } => {
            let index = load_index(&cli.snapshot, viewer)?;
            handle_featured(&index, min_rating, limit)
        }
        Commands::Summary => {
            let index = load_index(&cli.snapshot, viewer)?;
            handle_summary(&index)
        }
        Commands::Inbox { requests } => handle_inbox(&requests, viewer.as_ref())?,
        Commands::Generate {
            count,
            seed,
            output,
        } => handle_generate(count, seed, &output)?,
        Commands::Benchmark {
            members,
            iterations,
            seed,
        } => handle_benchmark(members, iterations, seed)?,
    }

    Ok(())
}

fn load_index(path: &Path, viewer: Option<MemberId>) -> Result<DirectoryIndex> {
    let start = Instant::now();
    let index = load_snapshot(path, viewer)
        .with_context(|| format!("Failed to load directory snapshot {}", path.display()))?;
    info!("Loaded {} members in {:?}", index.len(), start.elapsed());
    Ok(index)
}

/// Handle the 'browse' command
fn handle_browse(index: &DirectoryIndex, criteria: &FilterCriteria, json: bool) -> Result<()> {
    let view = DirectoryView::compute(index, criteria, &FeaturedSelector::new());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to serialize directory view")?
        );
        return Ok(());
    }

    if view.show_featured() {
        println!("{}", "Featured Professionals".bold().blue());
        for member in &view.featured {
            print_member_card(member);
        }
        println!();
    }

    let mut found = format!(
        "Found {} talented professionals",
        view.stats.count.to_string().bold()
    );
    if let Some(term) = &view.stats.search_term_echo {
        found.push_str(&format!(" matching \"{}\"", term));
    }
    println!("{found}");

    if view.filtered.is_empty() {
        match &view.stats.search_term_echo {
            Some(term) => println!("No results for \"{term}\". Try a different search term."),
            None => println!("No professionals match your current filters."),
        }
        println!(
            "Categories: {}",
            SKILL_CATEGORIES.join(", ").dimmed()
        );
        return Ok(());
    }

    for member in &view.filtered {
        print_member_row(member);
    }
    Ok(())
}

/// Handle the 'featured' command
fn handle_featured(index: &DirectoryIndex, min_rating: f64, limit: usize) {
    let featured = FeaturedSelector::new()
        .with_min_rating(min_rating)
        .with_limit(limit)
        .select(index);

    if featured.is_empty() {
        println!("No members rated {min_rating} or higher.");
        return;
    }

    println!("{}", "Featured Professionals".bold().blue());
    for (rank, member) in featured.iter().enumerate() {
        print!("{}. ", (rank + 1).to_string().green());
        print_member_card(member);
    }
}

/// Handle the 'summary' command
fn handle_summary(index: &DirectoryIndex) {
    let summary = DirectorySummary::from_index(index);

    println!("{}", "Directory Summary".bold().blue());
    println!("{}Members: {}", "• ".green(), summary.total_members);
    println!("{}Online now: {}", "• ".green(), summary.online_members);
    println!("{}Skills offered: {}", "• ".cyan(), summary.distinct_skills_offered);
    println!("{}Skills wanted: {}", "• ".cyan(), summary.distinct_skills_wanted);
    println!(
        "{}Rated {}+: {}",
        "• ".cyan(),
        FeaturedSelector::DEFAULT_MIN_RATING,
        summary.featured_eligible
    );
}

/// Handle the 'inbox' command
fn handle_inbox(path: &Path, viewer: Option<&MemberId>) -> Result<()> {
    ensure!(viewer.is_some(), "The inbox needs a viewer (--viewer or SKILL_SWAP_VIEWER)");

    let requests = load_swap_requests(path)
        .with_context(|| format!("Failed to load swap requests {}", path.display()))?;
    let pending = pending_for(&requests, viewer);

    if pending == 0 {
        println!("No pending swap requests.");
    } else {
        println!(
            "{} pending swap request{}",
            pending.to_string().bold().red(),
            if pending == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

/// Handle the 'generate' command
fn handle_generate(count: usize, seed: u64, output: &Path) -> Result<()> {
    let members = synthetic::generate_members(count, seed);

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &members)
        .context("Failed to write snapshot")?;

    println!(
        "{} Wrote {} members to {} (seed {})",
        "✓".green(),
        members.len(),
        output.display(),
        seed
    );
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(members: usize, iterations: usize, seed: u64) -> Result<()> {
    ensure!(iterations > 0, "iterations must be at least 1");

    let index = DirectoryIndex::from_members(
        synthetic::generate_members(members, seed),
        Some(MemberId::from(1u64)),
    );
    let selector = FeaturedSelector::new();
    let criteria = [
        FilterCriteria::new(),
        FilterCriteria::new().with_search(Some("dev")),
        FilterCriteria::new().with_category("Design"),
        FilterCriteria::new()
            .with_search(Some("react"))
            .with_availability(Availability::Available),
    ];

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    for i in 0..iterations {
        let start = Instant::now();
        let view = DirectoryView::compute(&index, &criteria[i % criteria.len()], &selector);
        std::hint::black_box(view.stats.count);
        timings.push(start.elapsed());
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];

    println!("{}", "Benchmark results:".bold().blue());
    println!("Members: {}", index.len());
    println!("Iterations: {}", iterations);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!(
        "Throughput: {:.2} views/second",
        iterations as f64 / total_time.as_secs_f64().max(f64::EPSILON)
    );
    Ok(())
}

fn print_member_card(member: &MemberRecord) {
    let preview = member.skill_preview(PREVIEW_SKILLS);
    let mut skills = preview.shown.join(", ");
    if preview.hidden > 0 {
        skills.push_str(&format!(" +{}", preview.hidden));
    }
    println!(
        "[{}] {}{} {} [{}]",
        member.avatar_initial.bold(),
        member.name,
        online_marker(member),
        format!("{}/5", member.rating).yellow(),
        skills
    );
}

fn print_member_row(member: &MemberRecord) {
    println!(
        "{} {} (@{}){}  {}",
        format!("[{}]", member.avatar_initial).bold(),
        member.name.bold(),
        member.username,
        online_marker(member),
        format!("{}/5", member.rating).yellow()
    );
    println!("    Offers: {}", join_or_dash(&member.skills_offered).green());
    println!("    Wants:  {}", join_or_dash(&member.skills_wanted).cyan());
}

fn online_marker(member: &MemberRecord) -> String {
    if member.is_online {
        format!(" {}", "●".green())
    } else {
        String::new()
    }
}

fn join_or_dash(skills: &[String]) -> String {
    if skills.is_empty() {
        "-".to_string()
    } else {
        skills.join(", ")
    }
}
