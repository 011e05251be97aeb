use clap::Parser;

use pgf_rs::die::ARCS_VARIABLES;
use pgf_rs::tower::Tower;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of skirmish dice.
    #[arg(long, value_name = "INT", default_value = "0")]
    skirmish: u32,

    /// Number of assault dice.
    #[arg(long, value_name = "INT", default_value = "0")]
    assault: u32,

    /// Number of raid dice.
    #[arg(long, value_name = "INT", default_value = "0")]
    raid: u32,

    /// First attribute to compare (one of h, s, b, n, k).
    #[arg(value_name = "ATTR", default_value = "h")]
    first: String,

    /// Second attribute to compare (one of h, s, b, n, k).
    #[arg(value_name = "ATTR", default_value = "s")]
    second: String,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log: simplelog::LevelFilter,
}

fn attribute_index(name: &str) -> color_eyre::Result<usize> {
    ARCS_VARIABLES
        .iter()
        .position(|&v| v == name)
        .ok_or_else(|| color_eyre::eyre::eyre!("unknown attribute '{}', expected one of {:?}", name, ARCS_VARIABLES))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let a = attribute_index(&args.first)?;
    let b = attribute_index(&args.second)?;

    let time_total = std::time::Instant::now();

    let tower = Tower::arcs(args.skirmish, args.assault, args.raid);
    println!("{}", tower.format("D", &ARCS_VARIABLES));
    println!("total outcomes = {}", tower.total_outcomes());

    let dist = tower.build_comparative_distribution(a, b)?;

    print!("{:>4}", format!("{}\\{}", args.first, args.second));
    for y in 0..=dist.range_b() {
        print!(" {:>7}", y);
    }
    println!();
    for x in 0..=dist.range_a() {
        print!("{:>4}", x);
        for y in 0..=dist.range_b() {
            print!(" {:>6.2}%", dist.probability(x, y) * 100.0);
        }
        println!();
    }
    println!("total = {:.2}%", dist.total() * 100.0);

    let time_total = time_total.elapsed();
    println!("\nAll done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
