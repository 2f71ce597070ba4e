use actix_web::web::{self};

pub mod routes {
    pub mod analytics;
    pub mod report;
}

mod service {
    pub(crate) mod analytics;
    pub(crate) mod report;
}

mod dtos {
    pub(crate) mod analytics;
    pub(crate) mod report;
}

pub fn mount_analytics() -> actix_web::Scope {
    web::scope("/analytics").service(routes::analytics::get_top_products)
}

pub fn mount_reports() -> actix_web::Scope {
    web::scope("/reports").service(routes::report::get_recent)
}
