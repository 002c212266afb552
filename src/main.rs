//! Dataset inspection CLI.
//!
//! Lists a dataset's annotation tasks against a live API and prints
//! per-task status plus overall completion progress.
//!
//! Usage: `ecotag <api-base-url> <dataset-id>`

use ecotag::navigator::TaskNavigator;
use ecotag::{HttpTaskGateway, TaskGateway};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (Some(api_base_url), Some(dataset_id)) = (args.next(), args.next()) else {
        eprintln!("usage: ecotag <api-base-url> <dataset-id>");
        std::process::exit(2);
    };

    let gateway = HttpTaskGateway::new(api_base_url);
    if let Err(err) = run(gateway, &dataset_id).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run<G: TaskGateway>(
    gateway: G,
    dataset_id: &str,
) -> Result<(), ecotag::navigator::NavigatorError> {
    let nav = TaskNavigator::open(gateway, dataset_id).await?;

    println!("dataset {dataset_id}: {} tasks", nav.task_count());
    for (index, task) in nav.tasks().iter().enumerate() {
        let name = task
            .original_filename
            .as_deref()
            .unwrap_or(task.image_url.as_str());
        println!(
            "  [{index:3}] {:?}  {} annotations  {name}",
            task.status,
            task.annotations.len(),
        );
    }
    println!("progress: {:.1}%", nav.progress());
    Ok(())
}
