//! Seed the database with sample cafes for local development.
//!
//! Assumes the schema exists; run `cafe-cli migrate` first.

use cafe_api_server::config::ServerConfig;
use cafe_api_server::db::{self, CafeRepository};
use cafe_api_server::models::CafeFields;
use tracing::info;

/// Insert `count` sample cafes into the configured database.
///
/// The fixed sample set repeats with a numeric suffix once exhausted.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or an insert fails.
pub async fn run(count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;
    let repo = CafeRepository::new(&pool);

    let samples = sample_cafes();
    for (index, mut fields) in samples.iter().cloned().cycle().take(count).enumerate() {
        if index >= samples.len() {
            fields.name = format!("{} {}", fields.name, index / samples.len() + 1);
        }
        let id = repo.insert(&fields).await?;
        info!(%id, name = %fields.name, "Seeded cafe");
    }

    info!(count, "Seeding complete");
    Ok(())
}

/// The fixed sample set.
fn sample_cafes() -> Vec<CafeFields> {
    vec![
        CafeFields {
            name: "Science Gallery London".to_owned(),
            map_url: "https://g.page/scigallerylon".to_owned(),
            img_url: "https://atlondonbridge.com/wp-content/uploads/2019/02/Pano_9758_9761-Edit-190918_LTS_Science_Gallery-Medium-Crop-V2.jpg".to_owned(),
            location: "London Bridge".to_owned(),
            seats: "50+".to_owned(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: true,
            can_take_calls: true,
            coffee_price: "£2.40".to_owned(),
        },
        CafeFields {
            name: "Social - Copeland Road".to_owned(),
            map_url: "https://goo.gl/maps/Ns4TaWvNyH3UZeTPA".to_owned(),
            img_url: "https://images.squarespace-cdn.com/content/v1/5734f38c8a65e2de615e9d59/1555848269936-XW23BPTD0O3PTEM9X18M/copeland-park.jpg".to_owned(),
            location: "Peckham".to_owned(),
            seats: "20-30".to_owned(),
            has_toilet: false,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: "£2.75".to_owned(),
        },
        CafeFields {
            name: "One & All Cafe Peckham".to_owned(),
            map_url: "https://g.page/one-all-cafe".to_owned(),
            img_url: "https://lh3.googleusercontent.com/p/AF1QipPM10ad4s2vZp-fjL1cgJiDHkP2LopMm0U-BXHc=s0".to_owned(),
            location: "Peckham".to_owned(),
            seats: "20-30".to_owned(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: "£2.75".to_owned(),
        },
        CafeFields {
            name: "The Bike Shed".to_owned(),
            map_url: "https://goo.gl/maps/sRMctJRqdHm7XNMT7".to_owned(),
            img_url: "https://thebikeshed.cc/wp-content/uploads/2020/07/IMG_20200716_113555-scaled.jpg".to_owned(),
            location: "Shoreditch".to_owned(),
            seats: "50+".to_owned(),
            has_toilet: true,
            has_wifi: false,
            has_sockets: true,
            can_take_calls: true,
            coffee_price: "£2.10".to_owned(),
        },
        CafeFields {
            name: "Ace Hotel Shoreditch".to_owned(),
            map_url: "https://goo.gl/maps/Pk59aBgzseAk56pQ6".to_owned(),
            img_url: "https://cdn.vox-cdn.com/thumbor/I1cfTpKLJzC5NK1EO_7Nme6cXZY=/0x0:4000x2667/1200x800/filters:focal(1680x1014:2320x1654)/cdn.vox-cdn.com/uploads/chorus_image/image/54671265/12141184_1645022349143659_8028274121798433480_n.0.jpg".to_owned(),
            location: "Shoreditch".to_owned(),
            seats: "20-30".to_owned(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: "£3.25".to_owned(),
        },
        CafeFields {
            name: "Goswell Road Coffee".to_owned(),
            map_url: "https://goo.gl/maps/XuDXYCRHqvqPfGPF8".to_owned(),
            img_url: "https://media-cdn.tripadvisor.com/media/photo-s/07/a8/a9/40/goswell-road-coffee.jpg".to_owned(),
            location: "Clerkenwell".to_owned(),
            seats: "10-20".to_owned(),
            has_toilet: false,
            has_wifi: true,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: "£1.80".to_owned(),
        },
    ]
}
