//! Compiles an annotated record into a filter document.

use filter_engine::builder::FilterBuilder;
use filter_engine::describe_record;
use filter_engine::policy::merge::MergeStrategy;
use tracing::Level;

struct Employment {
    company_id: u64,
    salary: f64,
}

describe_record!(Employment {
    company_id => { operator: "eq", relation: "companies", },
    salary => { operator: "gte", },
});

struct PersonFilter {
    name: String,
    age: i64,
    tags: Vec<String>,
    employment: Employment,
    nickname: Option<String>,
}

describe_record!(PersonFilter {
    name => { lookup: "full_name", operator: "regex", },
    age => { operator: "gte", },
    tags => { operator: "in", },
    employment => { lookup: "employment", operator: "eq", },
    nickname => { operator: "eq", },
});

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let record = PersonFilter {
        name: "^Ali".to_string(),
        age: 21,
        tags: vec!["admin".to_string(), "ops".to_string()],
        employment: Employment {
            company_id: 7,
            salary: 1000.0,
        },
        nickname: None,
    };

    let mut builder = FilterBuilder::default().with_merge_strategy(MergeStrategy::Override);
    builder
        .scan(&record)?
        .merge_duplicates()?
        .build()?;

    println!("=== Compiled filter document ===");
    println!("{}", builder.output()?.to_json()?);

    println!("\n=== Compiled fields ===");
    for field in builder.fields() {
        println!(
            "#{} {} {} ({}) -> collection {:?}",
            field.index(),
            field.name(),
            field.operator(),
            field.kind(),
            field.collection()
        );
    }

    Ok(())
}
