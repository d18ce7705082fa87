#[actix_web::main]
async fn main() -> std::io::Result<()> {
    gramadales_recibos::run().await
}
