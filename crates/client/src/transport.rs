// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP transport for the scheduling endpoint.
//!
//! One plain-HTTP POST per operation, JSON body with an `action` tag.
//! The content type stays `text/plain;charset=utf-8`: the spreadsheet
//! endpoint never handled CORS preflights, and the server keys on the
//! `action` field rather than the header. Every request runs under a
//! timeout so a hung request can never leave a page in a permanent
//! loading state.

use serde::de::DeserializeOwned;
use shift_roster::{AvailabilityRoster, Person};
use shift_roster_api::{
    AckResponse, AllAvailabilityResponse, AvailabilityResponse, BackendError, BackendRequest,
    MetaResponse, ScheduleBackend, ScheduleResponse, availability_items, availability_set,
    roster_from_items, schedule_items, schedule_meta, schedule_rows,
};
use shift_roster_domain::{
    EmailKey, Employee, ScheduleMeta, ScheduleStatus, SlotId, Team, WeekStart,
};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::debug;

/// Errors constructing the transport. Request-time failures surface as
/// [`BackendError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The endpoint URL did not parse.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The endpoint URL uses a scheme this transport does not speak.
    #[error("unsupported scheme '{scheme}': only plain http endpoints are supported")]
    UnsupportedScheme {
        /// The offending scheme.
        scheme: String,
    },
}

/// The production [`ScheduleBackend`]: one HTTP/1.1 POST per operation.
#[derive(Debug, Clone)]
pub struct HttpScheduleBackend {
    /// `host:port` to connect to.
    authority: String,
    /// Host header value.
    host: String,
    /// Request path (plus query, if any).
    path: String,
    /// Per-request deadline, connection included.
    timeout: Duration,
}

impl HttpScheduleBackend {
    /// Creates a transport for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the URL does not parse, has no
    /// host, or is not plain `http`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TransportError> {
        let uri: http::Uri =
            endpoint
                .parse()
                .map_err(|e: http::uri::InvalidUri| TransportError::InvalidEndpoint {
                    url: endpoint.to_string(),
                    reason: e.to_string(),
                })?;

        match uri.scheme_str() {
            Some("http") | None => {}
            Some(other) => {
                return Err(TransportError::UnsupportedScheme {
                    scheme: other.to_string(),
                });
            }
        }

        let host: String = uri
            .host()
            .ok_or_else(|| TransportError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: String::from("missing host"),
            })?
            .to_string();
        let port: u16 = uri.port_u16().unwrap_or(80);
        let path: String = uri
            .path_and_query()
            .map_or_else(|| String::from("/"), |pq| pq.as_str().to_string());

        Ok(Self {
            authority: format!("{host}:{port}"),
            host,
            path,
            timeout,
        })
    }

    /// Posts one action body and decodes the JSON response envelope.
    async fn post_json<T: DeserializeOwned>(
        &self,
        request: &BackendRequest,
    ) -> Result<T, BackendError> {
        let body: String =
            serde_json::to_string(request).map_err(|e| BackendError::Decode {
                message: e.to_string(),
            })?;
        debug!(bytes = body.len(), path = %self.path, "posting scheduling action");

        match tokio::time::timeout(self.timeout, self.send(body)).await {
            Ok(result) => result,
            Err(_) => Err(BackendError::Transport {
                message: format!("request timed out after {:?}", self.timeout),
            }),
        }
    }

    async fn send<T: DeserializeOwned>(&self, body: String) -> Result<T, BackendError> {
        let transport = |e: &dyn std::fmt::Display| BackendError::Transport {
            message: e.to_string(),
        };

        let stream = tokio::net::TcpStream::connect(self.authority.as_str())
            .await
            .map_err(|e| transport(&e))?;
        let io = hyper_util::rt::TokioIo::new(stream);
        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| transport(&e))?;

        // Drive the connection in the background.
        tokio::spawn(async move {
            let _ = conn.await;
        });

        let request = http::Request::builder()
            .method("POST")
            .uri(self.path.as_str())
            .header("host", self.host.as_str())
            .header("content-type", "text/plain;charset=utf-8")
            .header("user-agent", "shift-roster-client/0.1")
            .body(http_body_util::Full::new(bytes::Bytes::from(body)))
            .map_err(|e| transport(&e))?;

        let response = sender.send_request(request).await.map_err(|e| transport(&e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Transport {
                message: format!("HTTP status {status}"),
            });
        }

        use http_body_util::BodyExt;
        let collected = response
            .into_body()
            .collect()
            .await
            .map_err(|e| transport(&e))?
            .to_bytes();
        debug!(bytes = collected.len(), "scheduling response received");

        serde_json::from_slice(&collected).map_err(|e| BackendError::Decode {
            message: e.to_string(),
        })
    }
}

impl ScheduleBackend for HttpScheduleBackend {
    async fn get_availability(
        &self,
        email: &EmailKey,
        week_start: WeekStart,
    ) -> Result<BTreeSet<SlotId>, BackendError> {
        let request = BackendRequest::GetAvailability {
            email: email.value().to_string(),
            week_start: week_start.iso(),
        };
        let response: AvailabilityResponse = self.post_json(&request).await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: response.message,
            });
        }
        Ok(availability_set(&response.availability))
    }

    async fn save_availability(
        &self,
        employee: &Employee,
        week_start: WeekStart,
        slots: &[SlotId],
    ) -> Result<(), BackendError> {
        let request = BackendRequest::SaveAvailability {
            email: employee.email.value().to_string(),
            name: employee.name.clone(),
            week_start: week_start.iso(),
            availability: availability_items(slots),
        };
        let response: AckResponse = self.post_json(&request).await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: response.message,
            });
        }
        Ok(())
    }

    async fn get_all_availability(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<AvailabilityRoster, BackendError> {
        let request = BackendRequest::GetAllAvailability {
            week_start: week_start.iso(),
            team: team.as_str().to_string(),
        };
        let response: AllAvailabilityResponse = self.post_json(&request).await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: response.message,
            });
        }
        Ok(roster_from_items(&response.availability, team))
    }

    async fn get_schedule(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<Vec<(SlotId, Person)>, BackendError> {
        let request = BackendRequest::GetSchedule {
            week_start: week_start.iso(),
            team: team.as_str().to_string(),
        };
        let response: ScheduleResponse = self.post_json(&request).await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: response.message,
            });
        }
        Ok(schedule_rows(&response.schedule, team))
    }

    async fn save_schedule(
        &self,
        week_start: WeekStart,
        team: Team,
        rows: &[(SlotId, Person)],
    ) -> Result<(), BackendError> {
        let request = BackendRequest::SaveSchedule {
            week_start: week_start.iso(),
            team: team.as_str().to_string(),
            schedule: schedule_items(rows),
        };
        let response: AckResponse = self.post_json(&request).await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: response.message,
            });
        }
        Ok(())
    }

    async fn get_schedule_meta(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<ScheduleMeta, BackendError> {
        let request = BackendRequest::GetScheduleMeta {
            week_start: week_start.iso(),
            team: team.as_str().to_string(),
        };
        let response: MetaResponse = self.post_json(&request).await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: response.message,
            });
        }
        Ok(schedule_meta(response.meta.as_ref()))
    }

    async fn set_schedule_status(
        &self,
        week_start: WeekStart,
        team: Team,
        status: ScheduleStatus,
        actor: &Employee,
        note: &str,
    ) -> Result<ScheduleMeta, BackendError> {
        let request = BackendRequest::SetScheduleStatus {
            week_start: week_start.iso(),
            team: team.as_str().to_string(),
            status: status.as_str().to_string(),
            user_email: actor.email.value().to_string(),
            user_name: actor.name.clone(),
            note: note.to_string(),
        };
        let response: MetaResponse = self.post_json(&request).await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: response.message,
            });
        }
        // Backends that omit the record echo the requested transition.
        Ok(response.meta.as_ref().map_or_else(
            || ScheduleMeta {
                status,
                locked_by_email: Some(actor.email.value().to_string()),
                locked_by_name: Some(actor.name.clone()),
                locked_at: None,
                note: None,
            },
            |meta| schedule_meta(Some(meta)),
        ))
    }
}
