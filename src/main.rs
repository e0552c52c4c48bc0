#[tokio::main]
async fn main() {
    venue_backend::run().await;
}
