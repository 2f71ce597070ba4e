use actix_web::web::{self};

pub mod routes {
    pub mod organization;
}

mod service {
    pub(crate) mod organization;
}

mod dtos {
    pub(crate) mod organization;
}

pub fn mount_admin() -> actix_web::Scope {
    web::scope("/admin")
        .service(routes::organization::get_organizations)
        .service(routes::organization::delete_organization)
        .service(routes::organization::post_toggle_suspend)
}
