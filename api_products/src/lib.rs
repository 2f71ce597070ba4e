use actix_web::web::{self};

pub mod routes {
    pub mod product;
    pub mod shopify;
}

mod service {
    pub(crate) mod product;
    pub(crate) mod shopify;
}

mod dtos {
    pub(crate) mod product;
    pub(crate) mod shopify;
}

pub fn mount_products() -> actix_web::Scope {
    web::scope("/products").service(routes::product::get_products)
}

pub fn mount_shopify() -> actix_web::Scope {
    web::scope("/shopify").service(routes::shopify::post_unsync_all)
}
