//! Seeds a queue with four entries and serves the minimum
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=trace cargo run --example seed_queue
//! ```

use linked_priority_queue::{ListError, PriorityQueue};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ListError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut queue = PriorityQueue::new();
    for (priority, item) in [(2, 6), (1, 5), (4, 8), (3, 7)] {
        queue.insert(priority, item);
    }

    println!("{queue}");

    println!("the element with highest priority in the queue");
    println!("{}", queue.min()?);

    println!("remove and return the element with highest priority in the queue");
    println!("{}", queue.remove_min()?);
    println!("{queue}");

    Ok(())
}
