//! In-process stand-in for the remote order and coupon APIs.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use checkout_service::Settings;
use serde_json::{json, Value};

/// What the order endpoint received.
#[derive(Debug, Clone)]
pub struct RecordedOrder {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
pub struct Behavior {
    /// Status for `POST /order`.
    pub order_status: u16,
    /// Id assigned to created orders.
    pub order_id: String,
    /// `coupon id -> (status, body)` for `GET /coupons/{id}`; unknown ids get 404.
    pub coupons: HashMap<String, (u16, Value)>,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            order_status: 201,
            order_id: "order123".to_string(),
            coupons: HashMap::new(),
        }
    }
}

impl Behavior {
    pub fn with_coupon(mut self, id: &str, status: u16, body: Value) -> Self {
        self.coupons.insert(id.to_string(), (status, body));
        self
    }
}

#[derive(Clone, Default)]
struct Recorder {
    orders: Arc<Mutex<Vec<RecordedOrder>>>,
    coupon_lookups: Arc<Mutex<Vec<String>>>,
}

pub struct MockRemote {
    pub base_url: String,
    recorder: Recorder,
    handle: ServerHandle,
}

impl MockRemote {
    pub fn order_url(&self) -> String {
        format!("{}/order", self.base_url)
    }

    pub fn coupon_url(&self) -> String {
        format!("{}/coupons", self.base_url)
    }

    pub fn orders(&self) -> Vec<RecordedOrder> {
        self.recorder.orders.lock().unwrap().clone()
    }

    pub fn coupon_lookups(&self) -> Vec<String> {
        self.recorder.coupon_lookups.lock().unwrap().clone()
    }

    /// Settings pointing every remote endpoint at this mock.
    pub fn settings(&self) -> Settings {
        let order_url = self.order_url();
        let coupon_url = self.coupon_url();
        Settings::from_lookup(|key| match key {
            "ORDER_API_URL" => Some(order_url.clone()),
            "COUPON_API_URL" => Some(coupon_url.clone()),
            "PAYMENT_LINK_URL" => Some("https://payment.example.com/pay".to_string()),
            _ => None,
        })
        .expect("mock settings are valid")
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn create_order(
    behavior: web::Data<Behavior>,
    recorder: web::Data<Recorder>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    recorder.orders.lock().unwrap().push(RecordedOrder {
        content_type,
        body: body.clone(),
    });

    let status = StatusCode::from_u16(behavior.order_status).unwrap();
    if !status.is_success() {
        return HttpResponse::build(status).json(json!({ "message": "Database error" }));
    }

    // Echo the payload with a server-assigned id.
    let mut created = body;
    if let Value::Object(map) = &mut created {
        map.insert("id".to_string(), Value::String(behavior.order_id.clone()));
    }
    HttpResponse::build(status).json(created)
}

async fn get_coupon(
    behavior: web::Data<Behavior>,
    recorder: web::Data<Recorder>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    recorder.coupon_lookups.lock().unwrap().push(id.clone());

    match behavior.coupons.get(&id) {
        Some((status, body)) => {
            HttpResponse::build(StatusCode::from_u16(*status).unwrap()).json(body.clone())
        }
        None => HttpResponse::NotFound().json(json!("Not found")),
    }
}

/// Starts the mock on an OS-assigned port. Must be called inside a Tokio runtime.
pub fn start(behavior: Behavior) -> MockRemote {
    let recorder = Recorder::default();
    let app_recorder = recorder.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(behavior.clone()))
            .app_data(web::Data::new(app_recorder.clone()))
            .route("/order", web::post().to(create_order))
            .route("/coupons/{id}", web::get().to(get_coupon))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind mock remote");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    tokio::spawn(server);

    MockRemote {
        base_url: format!("http://{}", addr),
        recorder,
        handle,
    }
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    // Bind to port 0 to let the OS assign a free port, then release it.
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}
