#[tokio::main]
async fn main() {
    if let Err(e) = silvercare_lib::run().await {
        eprintln!("silvercare: {e}");
        std::process::exit(1);
    }
}
