mod data;

use data::loader::ReadOptions;
use data::model::Dataset;

/// Thin driver: load a delimited file, summarise it, split it with a fixed
/// seed, and persist the training subset. The dataset path is the first
/// CLI argument (default `iris.csv`).
fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "iris.csv".to_string());

    let mut dataset = Dataset::new();
    dataset.read_delimited(&path, &ReadOptions::default());

    println!("Column labels: {:?}", dataset.labels());
    println!("Decision classes: {:?}", dataset.class_counts());

    match dataset.split(0.7, 0.2, 0.1, Some(42)) {
        Ok(splits) => {
            println!("Training records:   {}", splits.train.len());
            println!("Test records:       {}", splits.test.len());
            println!("Validation records: {}", splits.validation.len());
            dataset.save_csv(&splits.train, "train_data.csv");
        }
        Err(err) => log::error!("Split failed: {err}"),
    }

    println!("Sample rows:");
    dataset.print_rows(0, Some(6));

    if let Some((class, _)) = dataset.class_counts().into_iter().next() {
        println!("Rows in class {class:?}:");
        for row in dataset.rows_by_class(&class) {
            println!("{row:?}");
        }
    }
}
