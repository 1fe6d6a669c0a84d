use dioxus::{logger::tracing::{info, warn}, prelude::*};
use futures::{stream::SplitSink, SinkExt};
use futures_util::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message};
use tokio::sync::mpsc::Sender;

use crate::pages::dashboard::STATUS_WS_URL;
use super::server::{AppError, FeedRequest, StatusUpdate};

/// Broker destination for one user's order updates.
pub fn status_topic(username: &str) -> String {
  format!("/topic/order-status/{}", username)
}

/// Write half of the live subscription, parked in a signal so the next
/// submission can shut it down before opening its own.
pub struct FeedHandle {
  pub topic: String,
  pub write: SplitSink<WebSocket, Message>,
}

/// Unsubscribe and drop whatever feed is parked in the signal. Dropping the
/// write half closes the socket, which also ends the matching read loop.
pub async fn shutdown_feed(mut feed_conn: Signal<Option<FeedHandle>>) {
  let previous = feed_conn.write().take();
  if let Some(mut feed) = previous {
    let unsubscribe = serde_json::to_string(&FeedRequest::Unsubscribe { topic: feed.topic.clone() })
      .expect("error serializing unsubscribe frame!");
    match feed.write.send(Message::Text(unsubscribe)).await {
      Ok(_) => info!("unsubscribed from {}", feed.topic),
      Err(e) => warn!("error {:?} sending unsubscribe frame", e),
    }
  }
}

/// One subscription per submission: open the socket, subscribe to the user's
/// topic and forward every status message to the page until a terminal one
/// arrives. The feed is closed before the terminal update is forwarded, so
/// the reload it triggers never races the unsubscribe.
pub async fn track_order_status(
  username: String,
  mut feed_conn: Signal<Option<FeedHandle>>,
  update_tx: Sender<StatusUpdate>,
) -> Result<(), AppError> {
  let topic = status_topic(&username);

  // at most one live subscription per page instance
  shutdown_feed(feed_conn).await;

  let ws = WebSocket::open(STATUS_WS_URL).map_err(|e| AppError::FeedConnectionError(e.to_string()))?;
  let (mut write, mut read) = ws.split();

  let subscribe = serde_json::to_string(&FeedRequest::Subscribe { topic: topic.clone() })
    .map_err(|e| AppError::SerializeError(e.to_string()))?;
  write.send(Message::Text(subscribe)).await
    .map_err(|e| AppError::FeedConnectionError(e.to_string()))?;
  info!("subscribed to {}", topic);

  // park the write half for the eventual unsubscribe
  *feed_conn.write() = Some(FeedHandle { topic, write });

  while let Some(Ok(frame)) = read.next().await {
    let body = match frame {
      Message::Text(s) => s,
      Message::Bytes(_) => {
        warn!("ignoring binary frame on the status feed");
        continue;
      }
    };

    let update = match serde_json::from_str::<StatusUpdate>(&body) {
      Ok(update) => update,
      Err(e) => {
        warn!("skipping unparsable status frame: {}", e);
        continue;
      }
    };

    info!("order {} reported {}", update.order_id, update.status);
    let terminal = update.status.is_terminal();
    if terminal {
      shutdown_feed(feed_conn).await;
    }
    update_tx.send(update).await.map_err(|e| AppError::FeedChannelError(e.to_string()))?;
    if terminal {
      break;
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn topic_is_addressed_per_username() {
    assert_eq!(status_topic("gavro"), "/topic/order-status/gavro");
  }
}
