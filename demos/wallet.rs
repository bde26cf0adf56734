use theshow_companion::{Credentials, GameAPI, SessionManager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Use the persisted session if there is one, otherwise credentials from the environment.
    let mut session = SessionManager::builder();

    if let Ok(data_directory) = std::env::var("DATA_DIRECTORY") {
        session = session.data_directory(data_directory);
    }

    let session = session.build();
    let credentials = if session.rehydrate().await {
        session.credentials()?
    } else {
        let account_id = std::env::var("ACCOUNT_ID")?.parse()?;
        let account_token = std::env::var("ACCOUNT_TOKEN")?;

        Credentials::new(account_id, account_token)
    };
    let api = GameAPI::builder().build();
    let stubs = api.get_stubs(&credentials).await?;
    let packs = api.get_my_packs(&credentials).await?;

    println!("{stubs} stubs");

    for pack in &packs.packs {
        println!("{} x{}", pack.name, pack.qty);
    }

    Ok(())
}
