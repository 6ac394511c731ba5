// handlers/public/travel_booking.rs - POST /travel-booking handler

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::JsonBody;
use crate::database::models::NewTravelBooking;
use crate::handlers::utils::{internal_error, lenient_int, non_blank, parse_date, RequiredFields};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

const ENDPOINT: &str = "Travel booking";
const FAILURE: &str = "Internal server error";

/// Booking form as submitted; echoed back verbatim on success
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelBookingRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub passport_number: Option<String>,
    pub departure_country: Option<String>,
    pub destination_country: Option<String>,
    pub travel_date: Option<String>,
    pub return_date: Option<String>,
    pub travel_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub travelers: Option<i32>,
    pub travel_class: Option<String>,
    pub meal_preference: Option<String>,
    pub add_ons: Option<Vec<String>>,
    pub payment_method: Option<String>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookingData {
    pub booking: TravelBookingRequest,
}

impl TravelBookingRequest {
    fn validate(&self) -> RequiredFields {
        RequiredFields::new()
            .text("fullName", &self.full_name)
            .text("email", &self.email)
            .text("phone", &self.phone)
            .text("departureCountry", &self.departure_country)
            .text("destinationCountry", &self.destination_country)
            .text("travelDate", &self.travel_date)
            .text("travelType", &self.travel_type)
            .check("travelers", self.travelers.is_some_and(|n| n != 0))
            .text("travelClass", &self.travel_class)
            .text("paymentMethod", &self.payment_method)
    }

    fn to_row(&self) -> Result<NewTravelBooking, crate::error::ApiError> {
        let travel_date = parse_date("travelDate", self.travel_date.as_deref().unwrap_or_default())?;
        let return_date = match non_blank(&self.return_date) {
            Some(value) => Some(parse_date("returnDate", &value)?),
            None => None,
        };

        let add_ons = serde_json::to_string(self.add_ons.as_deref().unwrap_or_default())
            .map_err(internal_error(ENDPOINT, FAILURE))?;

        Ok(NewTravelBooking {
            full_name: self.full_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            passport_number: non_blank(&self.passport_number),
            departure_country: self.departure_country.clone().unwrap_or_default(),
            destination_country: self.destination_country.clone().unwrap_or_default(),
            travel_date,
            return_date,
            travel_type: self.travel_type.clone().unwrap_or_default(),
            travelers: self.travelers.unwrap_or_default(),
            travel_class: self.travel_class.clone().unwrap_or_default(),
            meal_preference: non_blank(&self.meal_preference),
            add_ons,
            payment_method: self.payment_method.clone().unwrap_or_default(),
            special_requests: non_blank(&self.special_requests),
        })
    }
}

/// POST /travel-booking - Store a travel booking and echo it back
///
/// `addOns` is persisted as a JSON array in text form; an absent list is
/// stored as `[]`.
pub async fn submit_travel_booking(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TravelBookingRequest>,
) -> ApiResult<BookingData> {
    payload.validate().finish("Missing required fields")?;
    let row = payload.to_row()?;

    state
        .store()
        .insert_travel_booking(&row)
        .await
        .map_err(internal_error(ENDPOINT, FAILURE))?;

    Ok(ApiResponse::success("Travel booking saved successfully", BookingData { booking: payload }).created())
}
