use std::iter::FromIterator;

use seq_list::List;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> seq_list::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut work_list = List::from_iter(
        [
            "Pi",
            "Joe",
            "Fridge",
            "Mind Joe Business",
            "1",
            "2",
            "3",
            "4",
            "23",
            "5",
            "6",
            "7",
            "8",
            "9",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    info!(len = work_list.len(), "built work list");

    let mut array = vec![String::new(); 14];
    work_list.copy_to(&mut array, 0)?;
    for element in &array {
        println!("{}", element);
    }

    work_list.remove_item(&"Joe".to_string())?;
    work_list.remove_item(&"Fridge".to_string())?;
    work_list.remove(5)?;
    work_list.remove(7)?;
    work_list.insert(8, "69".to_string())?;
    println!("{}", work_list.contains(&"69".to_string()));
    println!("{}", work_list.get(3)?);
    for element in &work_list {
        println!("{}", element);
    }

    work_list.clear()?;
    println!("{}", work_list.len());
    for element in &work_list {
        println!("{}", element);
    }
    Ok(())
}
