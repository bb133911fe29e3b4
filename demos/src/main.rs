use rowscan::{BindResult, ResultSet, Row, Rows, Value};
use tracing_subscriber::EnvFilter;

rowscan::record! {
    #[derive(Debug)]
    pub struct Reaction {
        pub likes: i32 => "likes",
        pub dislikes: i32 => "dislikes",
        pub day: String => "day",
        pub note: Option<String> => "note",
        pub cached_score: f64 => _,
    }
}

const WEEK: [(&str, i32, i32); 5] = [
    ("Monday", 5, 2),
    ("Tuesday", 8, 1),
    ("Wednesday", 3, 4),
    ("Thursday", 9, 0),
    ("Friday", 12, 3),
];

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn build_result_set() -> BindResult<ResultSet> {
    let mut set = ResultSet::new(["day", "likes", "dislikes", "note"]);
    for (day, likes, dislikes) in WEEK {
        let note = if likes > dislikes * 3 { Value::text("popular") } else { Value::Null };
        set.push_row(vec![day.into(), likes.into(), dislikes.into(), note])?;
    }
    Ok(set)
}

fn main() -> BindResult<()> {
    init_tracing();

    let mut source = build_result_set()?.into_rows();
    let replayed = ResultSet::capture(&mut source)?;
    println!("Captured {} rows", replayed.len());

    let mut rows = Rows::new(replayed.rows());
    let mut reactions: Vec<Reaction> = Vec::new();
    let scanned = rows.scan_to_struct_slice(&mut reactions);
    rows.close()?;
    scanned?;

    for reaction in &reactions {
        println!(
            "{:<10} likes={:<3} dislikes={:<3} note={:?} cached={}",
            reaction.day, reaction.likes, reaction.dislikes, reaction.note, reaction.cached_score
        );
    }

    if let Some(first) = replayed.row(0) {
        let mut monday = Reaction::default();
        Row::new(first).scan_to_struct(&mut monday)?;
        println!("First row: {:?}", monday);
    }

    Ok(())
}
