use futures::StreamExt;
use futures_channel::mpsc::UnboundedReceiver;
use listree::TransferIntent;
use tracing::{debug, info};

/// Stand-in transfer executor: prints every requested transfer instead of
/// performing it. Runs until all senders are gone and returns how many
/// transfers were requested.
pub async fn report_transfers(mut receiver: UnboundedReceiver<TransferIntent>) -> usize {
    debug!("Waiting for transfer requests");
    let mut count = 0;
    while let Some(intent) = receiver.next().await {
        info!("Not performing transfer: {}", intent);
        println!(
            "transfer {} from {} to {}",
            intent.filename, intent.source_path, intent.destination_path
        );
        count += 1;
    }
    count
}
