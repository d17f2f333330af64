//! GraphQL wire types and query documents.
//!
//! Documents are written once as constants; variables are typed structs so
//! a request can never be built with a missing or misnamed field. Response
//! payload structs mirror the top-level selection name of each document.

use rollcall_model::{User, UserId};
use serde::{Deserialize, Serialize};

/// Fetches the full roster.
pub const USERS_QUERY: &str = "{ users { id name email password } }";

/// Creates a record; the server assigns the identifier.
pub const ADD_USER_MUTATION: &str = "mutation addUser($name: String!, $email: String!, $password: String!) { addUser(name: $name, email: $email, password: $password) { id name email password } }";

/// Updates a record matched by identifier.
pub const UPDATE_USER_MUTATION: &str = "mutation updateUser($id: ID, $name: String!, $email: String!, $password: String!) { updateUser(id: $id, name: $name, email: $email, password: $password) { id name email password } }";

/// Request envelope posted to the endpoint.
///
/// `variables` is omitted entirely for documents that take none.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// Response envelope returned by the endpoint.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One server-reported error. Only the message is consumed; anything else
/// the server attaches (locations, extensions) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Variables for [`ADD_USER_MUTATION`].
#[derive(Debug, Serialize)]
pub struct AddUserVariables<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Variables for [`UPDATE_USER_MUTATION`].
#[derive(Debug, Serialize)]
pub struct UpdateUserVariables<'a> {
    pub id: UserId,
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Payload of [`USERS_QUERY`].
#[derive(Debug, Deserialize)]
pub struct UsersData {
    pub users: Vec<User>,
}

/// Payload of [`ADD_USER_MUTATION`].
#[derive(Debug, Deserialize)]
pub struct AddUserData {
    #[serde(rename = "addUser")]
    pub add_user: User,
}

/// Payload of [`UPDATE_USER_MUTATION`].
#[derive(Debug, Deserialize)]
pub struct UpdateUserData {
    #[serde(rename = "updateUser")]
    pub update_user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Selection set shared by every operation.
    const USER_FIELDS: &str = "id name email password";

    #[test]
    fn documents_select_every_record_field() {
        for document in [USERS_QUERY, ADD_USER_MUTATION, UPDATE_USER_MUTATION] {
            assert!(
                document.contains(USER_FIELDS),
                "document must select the full record: {document}"
            );
        }
    }

    #[test]
    fn query_request_omits_variables() {
        let request = GraphQlRequest::<()> {
            query: USERS_QUERY,
            variables: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["query"], USERS_QUERY);
        assert!(json.get("variables").is_none());
    }

    #[test]
    fn add_user_variables_carry_the_three_fields() {
        let request = GraphQlRequest {
            query: ADD_USER_MUTATION,
            variables: Some(AddUserVariables {
                name: "Bea",
                email: "bea@example.com",
                password: "hunter2",
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["variables"],
            serde_json::json!({
                "name": "Bea",
                "email": "bea@example.com",
                "password": "hunter2",
            })
        );
    }

    #[test]
    fn update_user_variables_carry_the_identifier() {
        let request = GraphQlRequest {
            query: UPDATE_USER_MUTATION,
            variables: Some(UpdateUserVariables {
                id: UserId(7),
                name: "Ana2",
                email: "ana@example.com",
                password: "secret",
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["variables"]["id"], 7);
        assert_eq!(json["variables"]["name"], "Ana2");
    }

    #[test]
    fn users_payload_parses_in_order() {
        let body = r#"{
            "data": {
                "users": [
                    {"id": 1, "name": "Ana", "email": "ana@example.com", "password": "a"},
                    {"id": 2, "name": "Bea", "email": "bea@example.com", "password": "b"}
                ]
            }
        }"#;
        let envelope: GraphQlResponse<UsersData> = serde_json::from_str(body).unwrap();
        let users = envelope.data.unwrap().users;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, UserId(1));
        assert_eq!(users[1].name, "Bea");
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn error_envelope_collects_messages() {
        let body = r#"{
            "data": null,
            "errors": [
                {"message": "boom", "locations": [{"line": 1, "column": 2}]},
                {"message": "bust"}
            ]
        }"#;
        let envelope: GraphQlResponse<UsersData> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.is_none());
        let messages: Vec<_> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["boom", "bust"]);
    }

    #[test]
    fn mutation_payloads_parse_the_returned_record() {
        let body = r#"{"data": {"addUser": {"id": 9, "name": "Cy", "email": "", "password": ""}}}"#;
        let envelope: GraphQlResponse<AddUserData> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.unwrap().add_user.id, UserId(9));

        let body = r#"{"data": {"updateUser": {"id": 9, "name": "Cy2", "email": "", "password": ""}}}"#;
        let envelope: GraphQlResponse<UpdateUserData> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.unwrap().update_user.name, "Cy2");
    }
}
