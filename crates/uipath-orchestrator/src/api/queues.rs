use std::path::Path;

use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use tracing::{info, warn};
use uipath_domain::{
    AddQueueItem, Priority, Queue, QueueItem, QueueItemCreated, Response, Selectable,
    UpdateQueueItem,
};

use crate::client::{UiPath, decode_scalar, export_to_json};
use crate::errors::Result;

impl UiPath {
    pub async fn list_queues(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Queue>>> {
        info!(folder = fid, "Retrieving a list of all queues");
        self.fetch_list("odata/QueueDefinitions", Some(fid), None, save_as).await
    }

    /// List queue items of folder `fid` matching the OData `filter`, e.g.
    /// `QueueDefinitionId eq 9 and Status eq 'New'`
    pub async fn list_queue_items(
        &self,
        fid: &str,
        filter: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<QueueItem>>> {
        info!(folder = fid, filter, "Retrieving queue items using the provided filter criteria");
        self.fetch_list("odata/QueueItems", Some(fid), Some(filter), save_as).await
    }

    pub async fn get_queue_item(
        &self,
        fid: &str,
        id: i64,
        save_as: Option<&Path>,
    ) -> Result<Response<QueueItem>> {
        info!(folder = fid, item = id, "Retrieving details for the queue item");
        self.fetch_one(&format!("odata/QueueItems({id})"), Some(fid), save_as).await
    }

    /// Add an item to `queue`.
    ///
    /// A queue enforcing unique references answers 409 when `reference` is
    /// already present; that is logged and reported through the status.
    pub async fn add_queue_item(
        &self,
        fid: &str,
        queue: &str,
        data: Map<String, Value>,
        reference: &str,
        priority: Priority,
        save_as: Option<&Path>,
    ) -> Result<Response<QueueItemCreated>> {
        info!(folder = fid, queue, reference, %priority, "Adding an item to the queue");
        let body = AddQueueItem::new(queue, reference, priority, data);
        let select = QueueItemCreated::select();
        let builder = self
            .request(Method::POST, "odata/Queues/UiPathODataSvc.AddQueueItem", Some(fid))?
            .query(&[("$select", select.as_str())])
            .json(&body);
        let response = self.send(builder).await?;
        let status = response.status();

        if status == StatusCode::CONFLICT {
            warn!(reference, "Item with reference {} already in the queue", reference);
        }
        if status != StatusCode::CREATED {
            return Ok(Response::status(status.as_u16()));
        }

        info!("Request successful");
        let content = response.bytes().await?;
        export_to_json(&content, save_as).await?;
        let created = decode_scalar::<QueueItemCreated>(&content)?;
        Ok(Response::new(status.as_u16(), Some(created)))
    }

    /// Replace the content of queue item `id` and raise it to high priority
    pub async fn update_queue_item(
        &self,
        fid: &str,
        queue: &str,
        id: i64,
        data: Map<String, Value>,
    ) -> Result<Response> {
        info!(folder = fid, queue, item = id, "Updating a queue item");
        let body = UpdateQueueItem::new(queue, data);
        let builder = self
            .request(Method::PUT, &format!("odata/QueueItems({id})"), Some(fid))?
            .json(&body);
        self.send_expecting(builder, StatusCode::OK).await
    }

    pub async fn delete_queue_item(&self, fid: &str, id: i64) -> Result<Response> {
        info!(folder = fid, item = id, "Deleting the queue item");
        let builder =
            self.request(Method::DELETE, &format!("odata/QueueItems({id})"), Some(fid))?;
        self.send_expecting(builder, StatusCode::NO_CONTENT).await
    }
}
