//! Seed binary: fills the database with synthetic users, products, and
//! orders through the same repository layer the server uses.

use chrono::{Days, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use shopkit::entity::{CreateOrder, CreateProduct, CreateUser, Order, Product, User};
use shopkit::{connect, ensure_tables, Repository};
use tracing_subscriber::EnvFilter;

const USER_COUNT: usize = 50;
const PRODUCT_COUNT: usize = 1200;
const ORDER_COUNT: usize = 50;

const FIRST_NAMES: &[&str] = &[
    "Ann", "Boris", "Clara", "Daniel", "Elena", "Felix", "Grace", "Henry", "Irina", "Jonas",
    "Karin", "Leo", "Marta", "Nikita", "Olga", "Pavel", "Rosa", "Stefan", "Tara", "Victor",
];
const LAST_NAMES: &[&str] = &[
    "Lee", "Park", "Smith", "Ivanov", "Müller", "Costa", "Novak", "Berg", "Kovacs", "Rossi",
    "Santos", "Weber", "Petrov", "Jansen", "Moreau", "Koch", "Silva", "Braun", "Orlov", "Vargas",
];
const PRODUCT_WORDS: &[&str] = &[
    "lamp", "mug", "chair", "notebook", "kettle", "blanket", "backpack", "speaker", "candle",
    "poster", "pillow", "clock", "plant", "bottle", "basket", "mirror", "rug", "frame", "vase",
    "tray",
];
const STATUSES: &[&str] = &["processed", "delivering", "delivered"];

fn pick<'a>(rng: &mut impl Rng, items: &'a [&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn random_password(rng: &mut impl Rng) -> String {
    (0..12).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("seed=info,shopkit=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shopkit.db".into());
    let pool = connect(&database_url).await?;
    ensure_tables(&pool).await?;

    let mut rng = rand::thread_rng();

    let mut users = Vec::with_capacity(USER_COUNT);
    for n in 0..USER_COUNT {
        let first = pick(&mut rng, FIRST_NAMES);
        let last = pick(&mut rng, LAST_NAMES);
        let user = Repository::<User>::create(
            &pool,
            CreateUser {
                first_name: first.to_string(),
                last_name: last.to_string(),
                // The counter keeps emails unique across the run.
                email: format!(
                    "{}.{}{}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    n
                ),
                password: random_password(&mut rng),
            },
        )
        .await?;
        users.push(user);
    }

    let mut products = Vec::with_capacity(PRODUCT_COUNT);
    for _ in 0..PRODUCT_COUNT {
        let name = pick(&mut rng, PRODUCT_WORDS);
        let product = Repository::<Product>::create(
            &pool,
            CreateProduct {
                name: name.to_string(),
                description: format!(
                    "A {} {} with a {} finish",
                    pick(&mut rng, &["small", "large", "classic", "modern", "handmade"]),
                    name,
                    pick(&mut rng, &["matte", "glossy", "wooden", "ceramic", "linen"]),
                ),
                price: rng.gen_range(10..=1000),
            },
        )
        .await?;
        products.push(product);
    }

    let today = Utc::now().date_naive();
    for _ in 0..ORDER_COUNT {
        let user = &users[rng.gen_range(0..users.len())];
        let product = &products[rng.gen_range(0..products.len())];
        Repository::<Order>::create(
            &pool,
            CreateOrder {
                user_id: user.id,
                product_id: product.id,
                order_date: today - Days::new(rng.gen_range(0..365)),
                status: pick(&mut rng, STATUSES).to_string(),
            },
        )
        .await?;
    }

    tracing::info!(
        users = USER_COUNT,
        products = PRODUCT_COUNT,
        orders = ORDER_COUNT,
        "seeding complete"
    );
    Ok(())
}
