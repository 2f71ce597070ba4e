use uuid::Uuid;

pub struct UserCreateRequest {
    pub organization_id: Option<Uuid>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}
