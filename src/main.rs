use expenseflow::config::Config;
use expenseflow::constants::{DEMO_PASSWORD, DEMO_USERNAME};
use expenseflow::{ExpenseStore, SessionManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load environment variables
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let mut store = ExpenseStore::open(&config.data_path, config.credential_scheme()).await?;
    if config.seed_demo {
        store.seed_demo_data().await?;
    }

    let mut session = SessionManager::new();
    session.restore(&store).await?;
    if session.is_authenticated() {
        log::info!("restored persisted session");
    } else if session.login(&store, DEMO_USERNAME, DEMO_PASSWORD).await? {
        log::info!("logged in as '{}'", DEMO_USERNAME);
    } else {
        log::warn!("demo login failed (seeding disabled and no demo account)");
        return Ok(());
    }

    if let Some(user) = session.current_user() {
        println!(
            "Signed in as {} ({} expenses, {} categories)",
            user.username,
            store.expenses_for_user(&user.user_id).len(),
            store.categories().len()
        );
        println!("Total spend: {:.2}", store.total_expenses(&user.user_id));
        for (category_id, sum) in store.expenses_by_category(&user.user_id) {
            println!("  {}: {:.2}", category_id, sum);
        }
    }

    Ok(())
}
