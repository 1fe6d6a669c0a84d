use dotenvy::dotenv;

// Service endpoints are baked in at compile time. A local .env overrides
// them; without one the defaults match the compose port layout.
const DEFAULTS: [(&str, &str); 4] = [
    ("PRODUCTS_URL", "http://localhost:8081/products"),
    ("USERS_URL", "http://localhost:8082/users"),
    ("ORDERS_URL", "http://localhost:8083/orders"),
    ("STATUS_WS_URL", "ws://localhost:8083/ws"),
];

fn main() {
    // Tell Cargo that if the env file changes, to rerun this build script.
    println!("cargo::rerun-if-changed=.env");

    dotenv().ok();

    for (key, default) in DEFAULTS {
        let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
        println!("cargo::rustc-env={key}={value}");
    }
}
