//! Ace Restaurant kiosk entry point. All logic lives in the library so
//! tests can drive it directly.

#[tokio::main]
async fn main() {
    ace_kiosk::run().await;
}
