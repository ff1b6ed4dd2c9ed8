//! OpenAPI description of the `/api/v1` surface.
//!
//! Record schemas come from `ToSchema` derives. Paths are built per record type
//! so every collection is described the same way its routes are mounted.

use crate::error::ErrorBody;
use crate::model::{Brand, Category, Movie, Product, Record, User};
use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder,
    PathsBuilder,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::response::{Response, ResponseBuilder};
use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, Ref, Schema, Type};
use utoipa::openapi::{RefOr, Required};
use utoipa::OpenApi;

const JSON: &str = "application/json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = "CRUD over in-memory products, users, categories, brands and movies"
    ),
    servers((url = "/api/v1", description = "Development server")),
    components(schemas(Product, User, Category, Brand, Movie, ErrorBody)),
    tags(
        (name = "Products", description = "Products, with lookups by category and brand"),
        (name = "Users", description = "User accounts"),
        (name = "Categories", description = "Product categories"),
        (name = "Brands", description = "Product brands"),
        (name = "Movies", description = "Movies")
    )
)]
struct ApiDoc;

/// The complete document served at `/openapi.json` and browsed at `/api-docs/`.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let paths = PathsBuilder::new();
    let paths = resource_paths::<Product>(paths);
    let paths = foreign_key_path(paths, "categories", "category");
    let paths = foreign_key_path(paths, "brands", "brand");
    let paths = resource_paths::<User>(paths);
    let paths = resource_paths::<Category>(paths);
    let paths = resource_paths::<Brand>(paths);
    let paths = resource_paths::<Movie>(paths);
    doc.paths = paths.build();
    doc
}

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn string_schema() -> RefOr<Schema> {
    RefOr::T(Schema::Object(ObjectBuilder::new().schema_type(Type::String).build()))
}

fn array_of(name: &str) -> RefOr<Schema> {
    RefOr::T(Schema::Array(ArrayBuilder::new().items(schema_ref(name)).build()))
}

/// `{ message, data }` with `data` pointing at the record schema.
fn envelope_of(name: &str) -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new()
            .property("message", string_schema())
            .required("message")
            .property("data", schema_ref(name))
            .required("data")
            .build(),
    ))
}

fn json_response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description, schema_ref("ErrorBody"))
}

fn operation(tag: &str, operation_id: String, summary: String) -> OperationBuilder {
    OperationBuilder::new()
        .tags(Some(vec![tag.to_string()]))
        .operation_id(Some(operation_id))
        .summary(Some(summary))
}

fn id_parameter(description: &str) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(description))
        .schema(Some(string_schema()))
        .build()
}

fn json_body(name: &str) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(JSON, ContentBuilder::new().schema(Some(schema_ref(name))).build())
        .required(Some(Required::True))
        .build()
}

fn collection_operations<R: Record>() -> (Operation, Operation) {
    let name = R::KIND;
    let list = operation(R::TAG, format!("list_{}", R::PATH), format!("List all {}", R::PATH))
        .response("200", json_response(&format!("Every {}", name.to_lowercase()), array_of(name)))
        .response("500", error_response("Unexpected error"))
        .build();
    let create = operation(R::TAG, format!("create_{}", R::PATH), format!("Create a {}", name.to_lowercase()))
        .request_body(Some(json_body(name)))
        .response("201", json_response(&format!("{} created", name), envelope_of(name)))
        .response("500", error_response("Unexpected error"))
        .build();
    (list, create)
}

fn item_operations<R: Record>() -> (Operation, Operation, Operation) {
    let name = R::KIND;
    let id_desc = format!("{} id", name);
    let read = operation(R::TAG, format!("read_{}", R::PATH), format!("Get a {} by id", name.to_lowercase()))
        .parameter(id_parameter(&id_desc))
        .response("200", json_response(&format!("The {}", name.to_lowercase()), schema_ref(name)))
        .response("404", error_response(&format!("{} not found", name)))
        .build();
    let update = operation(R::TAG, format!("update_{}", R::PATH), format!("Update a {} by id", name.to_lowercase()))
        .parameter(id_parameter(&id_desc))
        .request_body(Some(json_body(name)))
        .response("200", json_response(&format!("{} updated", name), envelope_of(name)))
        .response("404", error_response(&format!("{} not found", name)))
        .response("500", error_response("Unexpected error"))
        .build();
    let delete = operation(R::TAG, format!("delete_{}", R::PATH), format!("Delete a {} by id", name.to_lowercase()))
        .parameter(id_parameter(&id_desc))
        .response("200", json_response(&format!("{} deleted", name), envelope_of(name)))
        .response("404", error_response(&format!("{} not found", name)))
        .build();
    (read, update, delete)
}

fn resource_paths<R: Record>(paths: PathsBuilder) -> PathsBuilder {
    let (list, create) = collection_operations::<R>();
    let (read, update, delete) = item_operations::<R>();
    paths
        .path(
            format!("/{}", R::PATH),
            PathItemBuilder::new()
                .operation(HttpMethod::Get, list)
                .operation(HttpMethod::Post, create)
                .build(),
        )
        .path(
            format!("/{}/{{id}}", R::PATH),
            PathItemBuilder::new()
                .operation(HttpMethod::Get, read)
                .operation(HttpMethod::Patch, update)
                .operation(HttpMethod::Delete, delete)
                .build(),
        )
}

fn foreign_key_path(paths: PathsBuilder, segment: &str, label: &str) -> PathsBuilder {
    let op = operation(
        Product::TAG,
        format!("list_products_by_{}", label),
        format!("List products by {}", label),
    )
    .parameter(id_parameter(&format!("{} id", label)))
    .response("200", json_response(&format!("Products of the {}", label), array_of(Product::KIND)))
    .response("404", error_response(&format!("No products found for this {}", label)))
    .build();
    paths.path(
        format!("/products/{}/{{id}}", segment),
        PathItemBuilder::new().operation(HttpMethod::Get, op).build(),
    )
}
