use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;

use crossbeam_channel as cb;

use copy_match_engine::{prefilter, Batch, Classifier};

use crate::config::Config;
use crate::dictionary::SymbolDictionary;
use crate::emit::ReportWriters;
use crate::error::IoError;
use crate::record::RecordReader;

const PROGRESS_INTERVAL: u64 = 1_000_000;

pub fn run(config: Config) -> Result<(), IoError> {
    let dict = SymbolDictionary::load(&config.symbols_path)?;
    let num_symbols = dict.len().max(1);
    let out_dir: PathBuf = config.out_dir.clone();

    tracing::info!(dataset = %config.dataset_path.display(), num_symbols, "starting classification run");

    let (tx, rx) = cb::unbounded::<Batch>();
    let writer_handle = thread::spawn(move || -> Result<(), IoError> {
        let mut writers = ReportWriters::create(&out_dir)?;
        while let Ok(batch) = rx.recv() {
            writers.write_batch(&batch, &dict)?;
        }
        writers.flush_all()
    });

    let result = classify_into_channel(&config, num_symbols, &tx);
    drop(tx);

    let writer_result = writer_handle.join().expect("report writer thread panicked");

    result?;
    writer_result?;
    tracing::info!("classification run complete");
    Ok(())
}

fn classify_into_channel(
    config: &Config,
    num_symbols: usize,
    tx: &cb::Sender<Batch>,
) -> Result<(), IoError> {
    let file = File::open(&config.dataset_path)?;
    let mut reader = RecordReader::new(BufReader::new(file));
    let mut classifier = Classifier::new(num_symbols, config.mode, config.user_a, config.user_b);

    let mut evicted = Vec::new();
    let mut seen: u64 = 0;
    let mut kept: u64 = 0;

    while let Some(trade) = reader.next_trade()? {
        seen += 1;
        if !prefilter(&trade, config.user_a, config.user_b) {
            continue;
        }
        kept += 1;
        evicted.clear();
        classifier.ingest(trade, &mut evicted)?;
        for batch in evicted.drain(..) {
            if !batch.children.is_empty() {
                let _ = tx.send(batch);
            }
        }
        if seen % PROGRESS_INTERVAL == 0 {
            tracing::info!(seen, kept, "classification progress");
        }
    }

    evicted.clear();
    classifier.finish(&mut evicted);
    for batch in evicted.drain(..) {
        if !batch.children.is_empty() {
            let _ = tx.send(batch);
        }
    }
    Ok(())
}
