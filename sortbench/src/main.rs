use sortbench::TrackingAllocator;

#[global_allocator]
static ALLOCATOR: TrackingAllocator = TrackingAllocator::new();

fn main() {
    if let Err(err) = sortbench::run() {
        eprintln!("sortbench: {err:#}");
        std::process::exit(1);
    }
}
