use alloy_primitives::{Address, U256};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use invoice_encoder::{
    encoder::{encode_execute_call, encode_mint, encode_safe_transfer_from},
    types::{EncodedInvoice, KIND_MINT, KIND_TRANSFER},
    CallInvoice,
};

/// Build relay invoices for the Stylus forwarder and print the `executeCall` calldata.
///
/// The output can be sent with any wallet or RPC client; this tool never talks to a node.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Declared sender of the invoice (the account the call is relayed for).
    #[arg(long, env = "FORWARDER_SENDER")]
    sender: Address,

    /// Collection contract the payload is forwarded to.
    #[arg(long, env = "FORWARDER_TARGET")]
    target: Address,

    /// Native value attached to the forwarded call, in wei.
    #[arg(long, default_value = "0")]
    value: U256,

    /// Print JSON instead of plain lines.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Invoice for `_mint(to, collection, uri, amount, uuid)`.
    Mint {
        #[arg(long)]
        to: Address,
        #[arg(long)]
        collection: String,
        #[arg(long)]
        uri: String,
        #[arg(long)]
        amount: U256,
        #[arg(long)]
        uuid: String,
    },
    /// Invoice for `safeTransferFrom(from, to, id, amount, data)`.
    Transfer {
        #[arg(long)]
        from: Address,
        #[arg(long)]
        to: Address,
        #[arg(long)]
        id: U256,
        #[arg(long)]
        amount: U256,
        /// Hex-encoded `data` argument (0x-prefixed or bare).
        #[arg(long, default_value = "0x")]
        data: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let invoice = match cli.command {
        Command::Mint {
            to,
            ref collection,
            ref uri,
            amount,
            ref uuid,
        } => CallInvoice::new(
            cli.sender,
            cli.target,
            encode_mint(to, collection, uri, amount, uuid),
        )
        .with_kind(KIND_MINT),
        Command::Transfer {
            from,
            to,
            id,
            amount,
            ref data,
        } => {
            let data = hex::decode(data.trim_start_matches("0x"))
                .with_context(|| format!("invalid hex in --data: {data}"))?;
            CallInvoice::new(
                cli.sender,
                cli.target,
                encode_safe_transfer_from(from, to, id, amount, &data),
            )
            .with_kind(KIND_TRANSFER)
        }
    }
    .with_value(cli.value);

    let calldata = encode_execute_call(&invoice);
    let encoded = EncodedInvoice::new(&invoice, &calldata);

    if cli.json {
        let out = serde_json::to_string_pretty(&encoded).context("failed serializing invoice")?;
        println!("{out}");
    } else {
        println!("sender:   {}", encoded.sender);
        println!("target:   {}", encoded.target);
        println!("value:    {}", encoded.value);
        println!("kind:     {}", encoded.kind);
        println!("payload:  {}", encoded.payload);
        println!("calldata: {}", encoded.calldata);
        println!("status:   {}", encoded.status);
    }
    Ok(())
}
