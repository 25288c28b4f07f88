use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use serde_json::{Value, json};

use clientes_registry::configure;
use clientes_registry::domain::image::ImageLayout;
use clientes_registry::repository::DieselRepository;
use clientes_registry::storage::LocalFileStore;

mod common;

const BOUNDARY: &str = "----clientes-test-boundary";

const VALID_FIELDS: &[(&str, &str)] = &[
    ("nombre", "Ana"),
    ("apellido", "Diaz"),
    ("tipoDocumento", "DNI"),
    ("nroDocumento", "123"),
    ("tipo", "indi"),
    ("pais", "AR"),
    ("ciudad", "BA"),
    ("email", "a@b.com"),
    ("telefono", "1122334455"),
];

const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

fn multipart_body(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> Vec<u8> {
    multipart_body_with_file_name(
        fields,
        photo.map(|(content_type, bytes)| ("photo.jpg", content_type, bytes)),
    )
}

fn multipart_body_with_file_name(
    fields: &[(&str, &str)],
    photo: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, bytes)) = photo {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"fotoDelCliente\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn register_request(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> test::TestRequest {
    multipart_request(multipart_body(fields, photo))
}

fn multipart_request(body: Vec<u8>) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/clientes")
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

macro_rules! init_app {
    ($test_db:expr, $images_root:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .app_data(web::Data::new(LocalFileStore::new()))
                .app_data(web::Data::new(ImageLayout::new($images_root, 2023)))
                .configure(configure),
        )
        .await
    };
}

fn images_root(test_db: &common::TestDb) -> std::path::PathBuf {
    test_db.dir().join("ImagenesDeClientes")
}

#[actix_web::test]
async fn registers_client_and_serves_read_paths() {
    let test_db = common::TestDb::new("registers_client_and_serves_read_paths.db");
    let root = images_root(&test_db);
    let app = init_app!(test_db, root.clone());

    let resp = test::call_service(
        &app,
        register_request(VALID_FIELDS, Some(("image/jpeg", JPEG))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"mensaje": "Cliente registrado exitosamente."}));

    let photo = root.join("2023").join("1INDI.jpg");
    assert_eq!(std::fs::read(&photo).unwrap(), JPEG);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/clientes").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["tipo"], "INDI");
    assert_eq!(body[0]["modalidadPago"], "EFECTIVO");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/clientes/consultar?id=1&tipo=indi")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"pais": "AR", "ciudad": "BA", "telefono": "1122334455"})
    );
}

#[actix_web::test]
async fn lookup_outcomes() {
    let test_db = common::TestDb::new("lookup_outcomes.db");
    let root = images_root(&test_db);
    let app = init_app!(test_db, root);

    let resp = test::call_service(
        &app,
        register_request(VALID_FIELDS, Some(("image/jpeg", JPEG))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let get = |uri: &'static str| test::TestRequest::get().uri(uri).to_request();

    let resp = test::call_service(&app, get("/clientes/consultar?id=1&tipo=CORPO")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Tipo de cliente incorrecto"}));

    let resp = test::call_service(&app, get("/clientes/consultar?id=99&tipo=INDI")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, get("/clientes/consultar?id=1")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Debe ingresar tanto el ID como el tipo del cliente que desea consultar."
    );

    let resp = test::call_service(&app, get("/clientes/consultar?id=1&tipo=pyme")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn empty_list_is_not_found() {
    let test_db = common::TestDb::new("empty_list_is_not_found.db");
    let root = images_root(&test_db);
    let app = init_app!(test_db, root);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/clientes").to_request()).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "No se encontraron clientes"}));
}

#[actix_web::test]
async fn second_registration_with_same_key_is_rejected() {
    let test_db = common::TestDb::new("second_registration_with_same_key_is_rejected.db");
    let root = images_root(&test_db);
    let app = init_app!(test_db, root);

    let first = test::call_service(
        &app,
        register_request(VALID_FIELDS, Some(("image/jpeg", JPEG))).to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let mut fields = VALID_FIELDS.to_vec();
    fields.retain(|(name, _)| *name != "tipo");
    fields.push(("tipo", "INDI"));
    let second = test::call_service(
        &app,
        register_request(&fields, Some(("image/jpeg", JPEG))).to_request(),
    )
    .await;

    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(second).await;
    assert_eq!(
        body,
        json!({"error": "Ya existe el cliente: Ana Diaz y tipo INDI"})
    );
}

#[actix_web::test]
async fn validation_errors_are_bad_requests() {
    let test_db = common::TestDb::new("validation_errors_are_bad_requests.db");
    let root = images_root(&test_db);
    let app = init_app!(test_db, root);

    let mut bad_document = VALID_FIELDS.to_vec();
    bad_document.retain(|(name, _)| *name != "tipoDocumento");
    bad_document.push(("tipoDocumento", "CUIT"));
    let resp = test::call_service(
        &app,
        register_request(&bad_document, Some(("image/jpeg", JPEG))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Tipo de documento incorrecto. Debe ser uno de: DNI, LE, LC, PASAPORTE."
    );

    let resp = test::call_service(&app, register_request(VALID_FIELDS, None).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Completar datos obligatorios: nombre, apellido, email, tipoDocumento, nroDocumento, tipo, pais, ciudad, fotoDelCliente y telefono."
    );

    let resp = test::call_service(
        &app,
        register_request(VALID_FIELDS, Some(("image/png", JPEG))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/clientes").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn empty_photo_part_is_reported_as_missing() {
    let test_db = common::TestDb::new("empty_photo_part_is_reported_as_missing.db");
    let root = images_root(&test_db);
    let app = init_app!(test_db, root.clone());

    let no_bytes: &[u8] = &[];
    let no_file_chosen = multipart_body_with_file_name(
        VALID_FIELDS,
        Some(("", "application/octet-stream", no_bytes)),
    );
    let empty_jpeg =
        multipart_body_with_file_name(VALID_FIELDS, Some(("x.jpg", "image/jpeg", no_bytes)));

    for body in [no_file_chosen, empty_jpeg] {
        let resp = test::call_service(&app, multipart_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Completar datos obligatorios: nombre, apellido, email, tipoDocumento, nroDocumento, tipo, pais, ciudad, fotoDelCliente y telefono."
        );
    }

    assert!(!root.join("2023").exists());
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/clientes").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn photo_failure_still_creates_client() {
    let test_db = common::TestDb::new("photo_failure_still_creates_client.db");
    // A regular file where the images directory should be makes every write fail.
    let root = test_db.dir().join("not-a-directory");
    std::fs::write(&root, b"").unwrap();
    let app = init_app!(test_db, root.clone());

    let resp = test::call_service(
        &app,
        register_request(VALID_FIELDS, Some(("image/jpeg", JPEG))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["mensaje"],
        "Cliente registrado exitosamente, pero hubo un problema al guardar la imagen."
    );
    assert!(!root.join("2023").exists());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/clientes/consultar?id=1&tipo=INDI")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}
