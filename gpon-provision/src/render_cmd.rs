use std::path::Path;

use anyhow::Result;
use chrono::Local;
use gpon_provision::export::{default_password, write_export};
use gpon_provision::vendor::{self, Fields, Vendor};

use crate::cli::{RenderArgs, VendorArg};

pub fn run_render(args: RenderArgs) -> Result<()> {
    let vendor = vendor_of(args.vendor);
    let fields = Fields {
        serial: args.sn,
        frame: args.frame,
        slot: args.slot,
        port: args.port,
        ont_id: args.ont_id,
        line_profile: args.line_profile,
        sid: args.sid,
        customer: args.name,
        password: args
            .password
            .or_else(|| Some(default_password(Local::now().date_naive()))),
        vlan: args.vlan,
        onu_type: args.onu_type,
        olt_type: args.olt_type,
    };

    let snippet = vendor::render(vendor, &args.op, &fields)?;
    println!("{snippet}");

    if args.export {
        let context = format!("{}_{}", vendor.name(), args.op);
        let path = write_export(Path::new("."), &context, &snippet)?;
        eprintln!("saved: {}", path.display());
    }
    Ok(())
}

fn vendor_of(arg: VendorArg) -> Vendor {
    match arg {
        VendorArg::Huawei => Vendor::Huawei,
        VendorArg::Raisecom => Vendor::Raisecom,
        VendorArg::Bdcom => Vendor::Bdcom,
        VendorArg::Zte => Vendor::Zte,
        VendorArg::Fiberhome => Vendor::Fiberhome,
        VendorArg::Viberlink => Vendor::Viberlink,
    }
}
