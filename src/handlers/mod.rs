use actix_web::web;

pub mod bookings;
pub mod cleaners;
pub mod cleaning_orders;
pub mod rooms;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rooms")
            .route("", web::get().to(rooms::list_rooms))
            .route("", web::post().to(rooms::create_room))
            .route("/{id}", web::get().to(rooms::get_room))
            .route("/{id}", web::put().to(rooms::update_room))
            .route("/{id}", web::delete().to(rooms::delete_room)),
    )
    .service(
        web::scope("/bookings")
            .route("", web::get().to(bookings::list_bookings))
            .route("", web::post().to(bookings::create_booking))
            .route("/{id}", web::get().to(bookings::get_booking))
            .route("/{id}", web::put().to(bookings::update_booking))
            .route("/{id}", web::delete().to(bookings::delete_booking)),
    )
    .service(
        web::scope("/cleaners")
            .route("", web::get().to(cleaners::list_cleaners))
            .route("", web::post().to(cleaners::create_cleaner))
            .route("/{id}", web::get().to(cleaners::get_cleaner))
            .route("/{id}", web::put().to(cleaners::update_cleaner))
            .route("/{id}", web::delete().to(cleaners::delete_cleaner))
            .route(
                "/{id}/cleaning-orders",
                web::get().to(cleaning_orders::list_orders_by_cleaner),
            ),
    )
    .service(
        web::scope("/cleaning-orders")
            .route("", web::get().to(cleaning_orders::list_orders))
            .route("", web::post().to(cleaning_orders::create_order))
            .route("/{id}", web::get().to(cleaning_orders::get_order))
            .route("/{id}", web::put().to(cleaning_orders::update_order))
            .route("/{id}", web::delete().to(cleaning_orders::delete_order))
            .route(
                "/{id}/cleaners",
                web::post().to(cleaning_orders::assign_cleaner),
            )
            .route(
                "/{id}/cleaners/{cleaner_id}",
                web::delete().to(cleaning_orders::remove_cleaner),
            ),
    );
}
