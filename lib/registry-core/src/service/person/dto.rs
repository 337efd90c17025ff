use one_dto_mapper::From;
use shared_types::PersonId;
use time::OffsetDateTime;

use crate::model::person::Person;

#[derive(Clone, Debug)]
pub struct CreatePersonRequestDTO {
    pub full_name: String,
    pub phone: String,
    pub currency: String,
}

#[derive(Clone, Debug, From)]
#[from(Person)]
pub struct GetPersonResponseDTO {
    pub id: PersonId,
    pub full_name: String,
    pub phone: String,
    pub currency: String,
    pub price: f64,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}
