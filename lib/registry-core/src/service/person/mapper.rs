use time::OffsetDateTime;

use super::dto::CreatePersonRequestDTO;
use crate::model::person::CreatePersonRequest;

pub(super) fn person_from_create_request(
    request: CreatePersonRequestDTO,
    price: f64,
) -> CreatePersonRequest {
    let now = OffsetDateTime::now_utc();

    CreatePersonRequest {
        full_name: request.full_name,
        phone: request.phone,
        currency: request.currency,
        price,
        created_date: now,
        last_modified: now,
    }
}
